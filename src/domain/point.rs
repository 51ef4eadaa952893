use serde::Serialize;

use crate::error::{Result, ZoneError};

/// A WGS84 location in decimal degrees.
///
/// Stored as (lat, lon). GeoJSON positions are (lon, lat); use
/// [`Point::from_lon_lat`] when reading them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a point from a GeoJSON position `[lon, lat, ...]`.
    ///
    /// Extra elements (altitude) are ignored.
    pub fn from_lon_lat(position: &[f64]) -> Result<Self> {
        match position {
            [lon, lat, ..] => {
                let point = Self::new(*lat, *lon);
                if !point.is_finite() {
                    return Err(ZoneError::InvalidCoordinate(format!("{:?}", position)));
                }
                Ok(point)
            }
            _ => Err(ZoneError::InvalidCoordinate(format!(
                "position needs 2 elements, got {}",
                position.len()
            ))),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Linear interpolation in lat/lon space, `t` in [0, 1]
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.lat + (other.lat - self.lat) * t,
            self.lon + (other.lon - self.lon) * t,
        )
    }

    /// Planar coordinate for the `geo` crate: x = lon, y = lat
    pub fn to_coord(self) -> geo::Coord<f64> {
        geo::coord! { x: self.lon, y: self.lat }
    }
}

impl From<(f64, f64)> for Point {
    /// From a `(lat, lon)` tuple.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
