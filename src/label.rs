use crate::feature::Feature;

pub const LINE_BREAK: &str = "<br/>";

/// Numeric properties (frequency, catalog) use `0` for "none".
fn is_unset(value: &str) -> bool {
    value.is_empty() || value == "0"
}

pub fn airfield_label(feature: &Feature) -> String {
    let a = &feature.attributes;
    let mut text = a.name.clone();
    if !a.icao.is_empty() {
        text += &format!(" ({})", a.icao);
    }
    text += LINE_BREAK;
    if !is_unset(&a.frequency) {
        text += &a.frequency;
    }
    text += " ";
    text += &a.elevation;
    text += "m";
    text
}

pub fn outlanding_label(feature: &Feature) -> String {
    let a = &feature.attributes;
    let mut text = a.name.clone();
    if !is_unset(&a.catalog) {
        text += " ";
        text += &a.catalog;
    }
    text += LINE_BREAK;
    text += &a.elevation;
    text += "m";
    text
}

/// Waypoints only get a tooltip.
pub fn waypoint_label(feature: &Feature) -> String {
    feature.attributes.description.clone()
}
