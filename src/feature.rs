use crate::flags::Flags;
use derive_builder::Builder;

/// Discriminator carried in the `Go` property of every feature.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FeatureKind {
    Airfield,
    Waypoint,
    /// Any other tag the producer sent. Kept so the caller can decide
    /// whether to skip or report it.
    Unrecognized(String),
}

impl From<&str> for FeatureKind {
    fn from(tag: &str) -> Self {
        match tag {
            "Airfield" => FeatureKind::Airfield,
            "Waypoint" => FeatureKind::Waypoint,
            other => FeatureKind::Unrecognized(other.to_owned()),
        }
    }
}

/// Named feature properties, kept as the text the producer sent.
///
/// An empty string means "not set"; see `label` for the sentinel rules.
#[derive(Clone, Debug, Default, Eq, PartialEq, Builder)]
#[builder(default, setter(into))]
pub struct Attributes {
    pub id: String,
    pub name: String,
    pub icao: String,
    pub frequency: String,
    pub elevation: String,
    pub runway: String,
    pub catalog: String,
    pub description: String,
    pub region: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub kind: FeatureKind,
    /// Only meaningful for airfields.
    pub flags: Flags,
    /// GeoJSON order: `[longitude, latitude]`.
    pub geometry: [f64; 2],
    pub attributes: Attributes,
}

impl Feature {
    pub fn new(kind: FeatureKind, flags: Flags, geometry: [f64; 2], attributes: Attributes) -> Self {
        Feature {
            kind,
            flags,
            geometry,
            attributes,
        }
    }

    pub fn airfield(flags: Flags, geometry: [f64; 2], attributes: Attributes) -> Self {
        Feature::new(FeatureKind::Airfield, flags, geometry, attributes)
    }

    pub fn waypoint(geometry: [f64; 2], attributes: Attributes) -> Self {
        Feature::new(FeatureKind::Waypoint, Flags::empty(), geometry, attributes)
    }
}
