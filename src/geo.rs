use crate::error::{Error, Result};
use crate::feature::Feature;
use serde::Serialize;

/// Position handed to the map surface, latitude first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon { lat, lon }
    }

    /// Its backwards in GeoJSON: `[lon, lat]`.
    pub fn from_geojson(point: [f64; 2]) -> Result<Self> {
        let [lon, lat] = point;
        if !lon.is_finite() || !lat.is_finite() {
            return Err(Error::MalformedGeometry { lon, lat });
        }
        Ok(LatLon::new(lat, lon))
    }

    /// KML wants `lon,lat[,alt]`.
    pub fn to_kml(self) -> String {
        format!("{},{}", self.lon, self.lat)
    }
}

pub fn extract(feature: &Feature) -> Result<LatLon> {
    LatLon::from_geojson(feature.geometry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_swap() {
        let pos = LatLon::from_geojson([7.33, 46.22]).unwrap();
        assert_eq!(pos, LatLon::new(46.22, 7.33));
        assert_eq!(pos.to_kml(), "7.33,46.22");
    }

    #[test]
    fn test_non_finite_components_rejected() {
        for point in &[
            [f64::NAN, 46.0],
            [7.0, f64::NAN],
            [f64::INFINITY, 46.0],
            [7.0, f64::NEG_INFINITY],
        ] {
            match LatLon::from_geojson(*point) {
                Err(Error::MalformedGeometry { .. }) => (),
                other => panic!("expected malformed geometry, got {:?}", other),
            }
        }
    }
}
