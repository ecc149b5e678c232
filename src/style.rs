use crate::feature::Feature;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Color(u8, u8, u8);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b)
    }

    /// KML colors are `aabbggrr`.
    pub fn to_kml(self, opacity: f64) -> String {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("{:02x}{:02x}{:02x}{:02x}", alpha, self.2, self.1, self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const PAVED_COLOR: Color = Color::rgb(0x33, 0x66, 0x99);
pub const UNPAVED_COLOR: Color = Color::rgb(0x55, 0x00, 0x55);
pub const OUTLANDING_COLOR: Color = Color::rgb(0x1A, 0x33, 0x4C);
pub const WAYPOINT_COLOR: Color = Color::rgb(0x00, 0x00, 0xFF);

/// Disc of radius 10 with a horizontal runway bar through its center.
pub const AIRFIELD_PATH: &str =
    "M-10,0 a10,10 0 1,0 20,0 a10,10 0 1,0 -20,0 M-8,-1 L8,-1 L8,1 L-8,1 L-8,-1";
/// Disc of radius 5.
pub const OUTLANDING_PATH: &str = "M-5,0 a5,5 0 1,0 10,0 a5,5 0 1,0 -10,0";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPath {
    Svg(&'static str),
    /// The map surface's builtin circle symbol.
    Circle,
}

/// Vector icon definition. Scale, opacity and colors are fixed per variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IconSpec {
    pub path: IconPath,
    pub fill_color: Option<Color>,
    pub fill_opacity: f64,
    pub stroke_color: Option<Color>,
    pub stroke_weight: f64,
    pub stroke_opacity: f64,
    pub scale: f64,
    /// Degrees clockwise. `None` leaves the icon unrotated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl IconSpec {
    /// Color the label should share with the icon.
    pub fn color(&self) -> Option<Color> {
        self.fill_color.or(self.stroke_color)
    }
}

/// Rotation for a 4 character runway string such as `"0927"`.
///
/// The heading is read from the first two characters the way the web
/// client's `parseInt` does: leading blanks and a sign are allowed, and
/// only the leading digits count (`" 9"`, `"9 "` and `"+9"` are all 9).
/// The bar is drawn east-west, so heading 0 needs a -90 turn. Other lengths,
/// or a prefix without digits, leave the icon unrotated.
pub fn runway_rotation(runway: &str) -> Option<f64> {
    lazy_static! {
        static ref HEADING_REGEX: Regex = Regex::new(r"^\s*([+-]?[0-9]+)").unwrap();
    }

    if runway.chars().count() != 4 {
        return None;
    }
    let prefix: String = runway.chars().take(2).collect();
    let cap = HEADING_REGEX.captures(&prefix)?;
    let tens: i32 = cap[1].parse().ok()?;
    Some(f64::from(tens * 10 - 90))
}

pub fn airfield_color(feature: &Feature) -> Color {
    if feature.flags.is_paved() {
        PAVED_COLOR
    } else {
        UNPAVED_COLOR
    }
}

pub fn style_airfield(feature: &Feature) -> IconSpec {
    IconSpec {
        path: IconPath::Svg(AIRFIELD_PATH),
        fill_color: Some(airfield_color(feature)),
        fill_opacity: 0.7,
        stroke_color: None,
        stroke_weight: 0.0,
        stroke_opacity: 0.0,
        scale: 1.0,
        rotation: runway_rotation(&feature.attributes.runway),
    }
}

pub fn style_outlanding(_feature: &Feature) -> IconSpec {
    IconSpec {
        path: IconPath::Svg(OUTLANDING_PATH),
        fill_color: None,
        fill_opacity: 0.0,
        stroke_color: Some(OUTLANDING_COLOR),
        stroke_weight: 1.0,
        stroke_opacity: 0.7,
        scale: 1.0,
        rotation: None,
    }
}

pub fn style_waypoint(_feature: &Feature) -> IconSpec {
    IconSpec {
        path: IconPath::Circle,
        fill_color: None,
        fill_opacity: 0.0,
        stroke_color: Some(WAYPOINT_COLOR),
        stroke_weight: 2.0,
        stroke_opacity: 0.7,
        scale: 2.0,
        rotation: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::AttributesBuilder;
    use crate::flags::{Flag, Flags};

    fn airfield(flags: Flags, runway: &str) -> Feature {
        let attrs = AttributesBuilder::default().runway(runway).build().unwrap();
        Feature::airfield(flags, [7.0, 46.0], attrs)
    }

    #[test]
    fn test_runway_rotation() {
        assert_eq!(runway_rotation("0927"), Some(0.0));
        assert_eq!(runway_rotation("1836"), Some(90.0));
        assert_eq!(runway_rotation("0422"), Some(-50.0));
        assert_eq!(runway_rotation("274"), None);
        assert_eq!(runway_rotation(""), None);
        assert_eq!(runway_rotation("09270"), None);
        assert_eq!(runway_rotation("XX27"), None);
    }

    #[test]
    fn test_runway_rotation_reads_heading_like_parse_int() {
        assert_eq!(runway_rotation(" 927"), Some(0.0));
        assert_eq!(runway_rotation("9 27"), Some(0.0));
        assert_eq!(runway_rotation("+927"), Some(0.0));
        assert_eq!(runway_rotation("9X27"), Some(0.0));
        assert_eq!(runway_rotation("-127"), Some(-100.0));
        assert_eq!(runway_rotation("  27"), None);
        assert_eq!(runway_rotation("+-27"), None);
    }

    #[test]
    fn test_airfield_color_selection() {
        assert_eq!(style_airfield(&airfield(Flag::Asphalt.into(), "")).fill_color, Some(PAVED_COLOR));
        assert_eq!(style_airfield(&airfield(Flags::empty(), "")).fill_color, Some(UNPAVED_COLOR));
        let both = Flags::from(Flag::Asphalt).with(Flag::Concrete);
        assert_eq!(style_airfield(&airfield(both, "")).fill_color, Some(PAVED_COLOR));
        assert_eq!(style_airfield(&airfield(Flag::Grass.into(), "")).fill_color, Some(UNPAVED_COLOR));
    }

    #[test]
    fn test_airfield_icon_rotation() {
        assert_eq!(style_airfield(&airfield(Flags::empty(), "0927")).rotation, Some(0.0));
        assert_eq!(style_airfield(&airfield(Flags::empty(), "274")).rotation, None);
    }

    #[test]
    fn test_fixed_icons() {
        let f = airfield(Flag::Concrete.into(), "0927");
        let outlanding = style_outlanding(&f);
        assert_eq!(outlanding.path, IconPath::Svg(OUTLANDING_PATH));
        assert_eq!(outlanding.fill_color, None);
        assert_eq!(outlanding.stroke_color, Some(OUTLANDING_COLOR));
        assert_eq!(outlanding.rotation, None);

        let waypoint = style_waypoint(&f);
        assert_eq!(waypoint.path, IconPath::Circle);
        assert_eq!(waypoint.scale, 2.0);
        assert_eq!(waypoint.stroke_weight, 2.0);
        assert_eq!(waypoint.color(), Some(WAYPOINT_COLOR));
    }

    #[test]
    fn test_color_formats() {
        assert_eq!(PAVED_COLOR.to_string(), "#336699");
        assert_eq!(OUTLANDING_COLOR.to_kml(0.7), "b34c331a");
        assert_eq!(WAYPOINT_COLOR.to_kml(1.0), "ffff0000");
    }
}
