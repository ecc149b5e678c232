use crate::geo::LatLon;
use crate::style::{Color, IconSpec};
use serde::Serialize;

/// Registry a descriptor belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    Airfield,
    Waypoint,
}

impl From<GroupKey> for &str {
    fn from(x: GroupKey) -> &'static str {
        match x {
            GroupKey::Airfield => "airfield",
            GroupKey::Waypoint => "waypoint",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Group {
    pub key: GroupKey,
    /// Minimum zoom / priority hint passed on to the registry.
    pub priority: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelStyle {
    pub opacity: f64,
    pub color: Color,
}

/// Label drawn next to the icon. Text may contain `<br/>`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RichLabel {
    pub text: String,
    /// Pixel offset of the label relative to the marker position.
    pub anchor: (i32, i32),
    pub class: &'static str,
    pub style: LabelStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Rich(RichLabel),
    Tooltip(String),
}

impl Label {
    pub fn text(&self) -> &str {
        match self {
            Label::Rich(label) => &label.text,
            Label::Tooltip(text) => text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerDescriptor {
    pub position: LatLon,
    pub icon: IconSpec,
    pub label: Label,
    pub group: Group,
}
