//! Geofence evaluation: containment first, nearest boundary otherwise.

pub mod containment;
pub mod nearest;

pub use containment::{contains, zone_contains};
pub use nearest::{Proximity, SamplingResolution, nearest_boundary};

use crate::domain::{Point, ZoneSet};

/// Outcome of checking a point against a zone set
#[derive(Debug, Clone, PartialEq)]
pub enum ProximityResult {
    Inside,
    Outside(Proximity),
    /// Outside, and there is no boundary to measure to
    NoGeometry,
}

impl ProximityResult {
    pub fn is_inside(&self) -> bool {
        matches!(self, ProximityResult::Inside)
    }
}

/// A zone set paired with the sampling resolution used for distance queries.
///
/// Borrows the zones, so one set can back any number of concurrent fences.
#[derive(Debug, Clone, Copy)]
pub struct Geofence<'a> {
    zones: &'a ZoneSet,
    resolution: SamplingResolution,
}

impl<'a> Geofence<'a> {
    pub fn new(zones: &'a ZoneSet) -> Self {
        Self {
            zones,
            resolution: SamplingResolution::default(),
        }
    }

    pub fn with_resolution(mut self, resolution: SamplingResolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn zones(&self) -> &'a ZoneSet {
        self.zones
    }

    pub fn resolution(&self) -> SamplingResolution {
        self.resolution
    }

    pub fn contains(&self, point: Point) -> bool {
        contains(point, self.zones)
    }

    pub fn nearest_boundary(&self, point: Point) -> Option<Proximity> {
        nearest_boundary(point, self.zones, self.resolution)
    }

    /// Containment, then the nearest boundary if outside
    pub fn evaluate(&self, point: Point) -> ProximityResult {
        if self.contains(point) {
            return ProximityResult::Inside;
        }
        match self.nearest_boundary(point) {
            Some(proximity) => ProximityResult::Outside(proximity),
            None => ProximityResult::NoGeometry,
        }
    }
}

/// [`Geofence::evaluate`] with the default sampling resolution
pub fn evaluate(point: Point, zones: &ZoneSet) -> ProximityResult {
    Geofence::new(zones).evaluate(point)
}
