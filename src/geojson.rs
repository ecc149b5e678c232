//! GeoJSON feature collections as served for airfields and waypoints. `Go`
//! names the record type; everything else is read leniently.

use crate::error::Result;
use crate::feature::{Attributes, Feature, FeatureKind};
use crate::flags::Flags;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::io::Read;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<RawFeature>,
}

/// Geometry and properties stay untyped so one badly shaped feature is
/// reported on its own instead of failing the whole collection.
#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    geometry: Value,
    #[serde(default)]
    properties: Value,
}

pub fn from_str(json: &str) -> Result<Vec<Feature>> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    Ok(collection.features.into_iter().map(to_feature).collect())
}

pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Feature>> {
    let collection: FeatureCollection = serde_json::from_reader(reader)?;
    Ok(collection.features.into_iter().map(to_feature).collect())
}

/// Integers print without a fractional part, the way the web client shows
/// them.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn text(props: &Map<String, Value>, key: &str) -> String {
    match props.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => number_text(n),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Non-numeric coordinates become NaN and are rejected at extraction time.
fn coordinate(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn decode_flags(props: &Map<String, Value>) -> Flags {
    let bits = match props.get("Flags") {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };
    Flags::from_bits(bits as u32)
}

fn to_feature(raw: RawFeature) -> Feature {
    let props = match raw.properties {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    let coords = raw.geometry.get("coordinates").and_then(Value::as_array);
    let geometry = [
        coordinate(coords.and_then(|c| c.first())),
        coordinate(coords.and_then(|c| c.get(1))),
    ];

    let kind = FeatureKind::from(text(&props, "Go").as_str());
    let flags = match kind {
        FeatureKind::Airfield => decode_flags(&props),
        _ => Flags::empty(),
    };

    let attributes = Attributes {
        id: text(&props, "ID"),
        name: text(&props, "Name"),
        icao: text(&props, "ICAO"),
        frequency: text(&props, "Frequency"),
        elevation: text(&props, "Elevation"),
        runway: text(&props, "Runway"),
        catalog: text(&props, "Catalog"),
        description: text(&props, "Description"),
        region: text(&props, "Region"),
    };

    Feature::new(kind, flags, geometry, attributes)
}
