//! Nearest-boundary search by edge sampling.
//!
//! Each edge is sampled at evenly spaced parameters by linear interpolation
//! in lat/lon space and the closest sample wins. This is an approximation:
//! the true nearest point on a straight edge can fall between samples, so
//! the error grows with edge length divided by the number of steps.

use serde::Serialize;

use crate::domain::{Point, ZoneSet};
use crate::geometry::{Direction, bearing_to_compass, great_circle_distance, initial_bearing};

/// How finely each edge is sampled.
///
/// `steps` intervals give `steps + 1` samples per edge, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingResolution {
    steps: u32,
}

impl SamplingResolution {
    pub const DEFAULT_STEPS: u32 = 10;

    /// `steps` below 1 is raised to 1 (endpoints only).
    pub fn new(steps: u32) -> Self {
        Self {
            steps: steps.max(1),
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Parametric step between samples, 0.1 by default
    pub fn step(&self) -> f64 {
        1.0 / self.steps as f64
    }

    pub fn samples_per_edge(&self) -> usize {
        self.steps as usize + 1
    }

    /// Sample points along the edge `a -> b`, both endpoints included
    pub fn sample_edge(&self, a: Point, b: Point) -> impl Iterator<Item = Point> {
        let steps = self.steps;
        (0..=steps).map(move |i| a.lerp(&b, i as f64 / steps as f64))
    }
}

impl Default for SamplingResolution {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEPS)
    }
}

/// Distance and direction from a query point to the closest sampled
/// boundary point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proximity {
    pub distance_m: f64,
    pub bearing_deg: f64,
    pub direction: Direction,
    pub nearest: Point,
    /// Name of the zone owning the nearest sample, if it has one
    pub zone: Option<String>,
}

/// Closest sampled point on any ring (outer or hole) of any zone.
///
/// `None` when the set has no edges at all. Ties keep the first sample
/// found, in zone, ring and edge order.
pub fn nearest_boundary(
    point: Point,
    zones: &ZoneSet,
    resolution: SamplingResolution,
) -> Option<Proximity> {
    let mut best: Option<(f64, Point, usize)> = None;
    let mut sampled = 0usize;

    for (index, zone) in zones.iter().enumerate() {
        for ring in zone.geometry().rings() {
            for (a, b) in ring.edges() {
                for sample in resolution.sample_edge(a, b) {
                    sampled += 1;
                    let distance = great_circle_distance(point, sample);
                    if best.is_none_or(|(min, _, _)| distance < min) {
                        best = Some((distance, sample, index));
                    }
                }
            }
        }
    }

    let (distance_m, nearest, index) = best?;
    let bearing_deg = initial_bearing(point, nearest);
    let zone = zones.iter().nth(index).and_then(|z| z.name().map(str::to_string));

    log::debug!(
        "Nearest of {} samples: ({:.6}, {:.6}) at {:.1}m, bearing {:.1}",
        sampled,
        nearest.lat,
        nearest.lon,
        distance_m,
        bearing_deg
    );

    Some(Proximity {
        distance_m,
        bearing_deg,
        direction: bearing_to_compass(bearing_deg),
        nearest,
        zone,
    })
}
