use crate::error::{Error, Result};
use crate::feature::{Feature, FeatureKind};
use crate::geo;
use crate::label;
use crate::marker::{Group, GroupKey, Label, LabelStyle, MarkerDescriptor, RichLabel};
use crate::style::{self, Color, OUTLANDING_COLOR};
use itertools::{Either, Itertools};

pub const DEFAULT_PRIORITY: u32 = 10;

const LABEL_OPACITY: f64 = 0.75;

/// Turns features into marker descriptors. Holds configuration only, so one
/// instance can be shared freely between threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classifier {
    pub priority: u32,
    /// Report unrecognized feature types instead of skipping them.
    pub strict: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier {
            priority: DEFAULT_PRIORITY,
            strict: false,
        }
    }
}

/// Result of classifying a whole collection.
#[derive(Debug, Default)]
pub struct Batch {
    pub markers: Vec<MarkerDescriptor>,
    /// Index into the input collection and what went wrong with it.
    pub errors: Vec<(usize, Error)>,
    /// Features that classified cleanly but produced no marker.
    pub skipped: usize,
}

impl Classifier {
    pub fn new(priority: u32, strict: bool) -> Self {
        Classifier { priority, strict }
    }

    pub fn classify(&self, feature: &Feature) -> Result<Vec<MarkerDescriptor>> {
        match &feature.kind {
            FeatureKind::Waypoint => Ok(vec![self.waypoint_marker(feature)?]),
            FeatureKind::Airfield if feature.flags.is_outlanding() => {
                Ok(vec![self.outlanding_marker(feature)?])
            }
            FeatureKind::Airfield => Ok(vec![self.airfield_marker(feature)?]),
            FeatureKind::Unrecognized(tag) if self.strict => {
                Err(Error::UnrecognizedType { tag: tag.clone() })
            }
            FeatureKind::Unrecognized(_) => Ok(Vec::new()),
        }
    }

    /// Classify every feature. A bad feature never stops the rest.
    pub fn classify_batch(&self, features: &[Feature]) -> Batch {
        let (produced, errors): (Vec<Vec<MarkerDescriptor>>, Vec<(usize, Error)>) = features
            .iter()
            .enumerate()
            .partition_map(|(i, f)| match self.classify(f) {
                Ok(markers) => Either::Left(markers),
                Err(e) => Either::Right((i, e)),
            });

        let skipped = produced.iter().filter(|m| m.is_empty()).count();
        Batch {
            markers: produced.into_iter().flatten().collect(),
            errors,
            skipped,
        }
    }

    fn group(&self, key: GroupKey) -> Group {
        Group {
            key,
            priority: self.priority,
        }
    }

    fn airfield_marker(&self, feature: &Feature) -> Result<MarkerDescriptor> {
        let label = rich_label(
            label::airfield_label(feature),
            (0, -12),
            "airportlabel",
            style::airfield_color(feature),
        );
        Ok(MarkerDescriptor {
            position: geo::extract(feature)?,
            icon: style::style_airfield(feature),
            label,
            group: self.group(GroupKey::Airfield),
        })
    }

    fn outlanding_marker(&self, feature: &Feature) -> Result<MarkerDescriptor> {
        let label = rich_label(
            label::outlanding_label(feature),
            (0, -8),
            "outlandinglabel",
            OUTLANDING_COLOR,
        );
        Ok(MarkerDescriptor {
            position: geo::extract(feature)?,
            icon: style::style_outlanding(feature),
            label,
            group: self.group(GroupKey::Airfield),
        })
    }

    fn waypoint_marker(&self, feature: &Feature) -> Result<MarkerDescriptor> {
        Ok(MarkerDescriptor {
            position: geo::extract(feature)?,
            icon: style::style_waypoint(feature),
            label: Label::Tooltip(label::waypoint_label(feature)),
            group: self.group(GroupKey::Waypoint),
        })
    }
}

fn rich_label(text: String, anchor: (i32, i32), class: &'static str, color: Color) -> Label {
    Label::Rich(RichLabel {
        text,
        anchor,
        class,
        style: LabelStyle {
            opacity: LABEL_OPACITY,
            color,
        },
    })
}
