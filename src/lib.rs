#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod error;
pub mod feature;
pub mod flags;
pub mod geo;
pub mod geojson;
pub mod label;
pub mod marker;
pub mod output;
pub mod registry;
pub mod style;
pub mod zip_util;

pub use classify::{Batch, Classifier};
pub use error::{Error, Result};
pub use feature::{Attributes, AttributesBuilder, Feature, FeatureKind};
pub use flags::{Flag, Flags};
pub use geo::LatLon;
pub use marker::{GroupKey, Label, MarkerDescriptor};
pub use registry::{register_all, MarkerManager, MarkerRegistry, Registries};
