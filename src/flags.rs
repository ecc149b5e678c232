use itertools::Itertools;
use std::fmt;

/// Named airfield attributes, in wire bit order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Flag {
    UnclearAirstrip,
    Outlanding,
    UlmSite,
    GliderSite,
    ElevationProved,
    Asphalt,
    Concrete,
    Loam,
    Sand,
    Clay,
    Grass,
    Gravel,
    Dirt,
}

impl Flag {
    pub const ALL: [Flag; 13] = [
        Flag::UnclearAirstrip,
        Flag::Outlanding,
        Flag::UlmSite,
        Flag::GliderSite,
        Flag::ElevationProved,
        Flag::Asphalt,
        Flag::Concrete,
        Flag::Loam,
        Flag::Sand,
        Flag::Clay,
        Flag::Grass,
        Flag::Gravel,
        Flag::Dirt,
    ];

    /// Bit position on the wire. Changing these breaks every producer.
    pub fn position(self) -> u32 {
        self as u32
    }

    pub fn mask(self) -> u32 {
        1 << self.position()
    }
}

impl From<Flag> for &str {
    fn from(x: Flag) -> &'static str {
        match x {
            Flag::UnclearAirstrip => "UnclearAirstrip",
            Flag::Outlanding => "Outlanding",
            Flag::UlmSite => "ULMSite",
            Flag::GliderSite => "GliderSite",
            Flag::ElevationProved => "ElevationProved",
            Flag::Asphalt => "Asphalt",
            Flag::Concrete => "Concrete",
            Flag::Loam => "Loam",
            Flag::Sand => "Sand",
            Flag::Clay => "Clay",
            Flag::Grass => "Grass",
            Flag::Gravel => "Gravel",
            Flag::Dirt => "Dirt",
        }
    }
}

/// Set of [`Flag`]s as carried in a feature's `Flags` property.
///
/// Bits outside the 13 named positions are kept so that `bits()` round-trips,
/// but they are never reported by [`Flags::iter`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Flags(u32);

impl Flags {
    pub fn from_bits(bits: u32) -> Self {
        Flags(bits)
    }

    pub fn empty() -> Self {
        Flags(0)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn with(self, flag: Flag) -> Self {
        Flags(self.0 | flag.mask())
    }

    pub fn has(self, flag: Flag) -> bool {
        self.0 & flag.mask() != 0
    }

    pub fn is_outlanding(self) -> bool {
        self.has(Flag::Outlanding)
    }

    pub fn is_paved(self) -> bool {
        self.has(Flag::Asphalt) || self.has(Flag::Concrete)
    }

    pub fn iter(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |&f| self.has(f))
    }
}

impl From<Flag> for Flags {
    fn from(flag: Flag) -> Self {
        Flags(flag.mask())
    }
}

impl std::iter::FromIterator<Flag> for Flags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        iter.into_iter().fold(Flags::empty(), Flags::with)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.iter().map(Into::<&str>::into).join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions_match_wire() {
        assert_eq!(Flag::UnclearAirstrip.mask(), 1);
        assert_eq!(Flag::Outlanding.mask(), 1 << 1);
        assert_eq!(Flag::Asphalt.mask(), 1 << 5);
        assert_eq!(Flag::Concrete.mask(), 1 << 6);
        assert_eq!(Flag::Dirt.mask(), 1 << 12);
        for (i, flag) in Flag::ALL.iter().enumerate() {
            assert_eq!(flag.position(), i as u32);
        }
    }

    #[test]
    fn test_paved_is_asphalt_or_concrete() {
        assert!(Flags::from(Flag::Asphalt).is_paved());
        assert!(Flags::from(Flag::Concrete).is_paved());
        assert!(Flags::from_bits(0b110_0000).is_paved());
        assert!(!Flags::from(Flag::Grass).is_paved());
        assert!(!Flags::empty().is_paved());
    }

    #[test]
    fn test_unknown_bits_are_kept_but_not_named() {
        let flags = Flags::from_bits(1 << 20 | Flag::Grass.mask());
        assert_eq!(flags.bits(), 1 << 20 | 1 << 10);
        assert_eq!(flags.iter().collect::<Vec<_>>(), vec![Flag::Grass]);
    }

    #[test]
    fn test_display_names() {
        let flags: Flags = vec![Flag::Outlanding, Flag::UlmSite, Flag::Grass]
            .into_iter()
            .collect();
        assert_eq!(flags.to_string(), "Outlanding|ULMSite|Grass");
        assert_eq!(Flags::empty().to_string(), "");
    }
}
