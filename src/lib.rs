//! zonecheck - Check a location against a set of permitted zones
//!
//! Tells whether a point lies inside any zone polygon and, when it doesn't,
//! how far away and in which compass direction the nearest zone boundary is.

pub mod config;
pub mod domain;
pub mod error;
pub mod fence;
pub mod geojson;
pub mod geometry;
pub mod report;

pub use domain::{Point, ZoneSet};
pub use error::ZoneError;
pub use fence::{Geofence, ProximityResult};
