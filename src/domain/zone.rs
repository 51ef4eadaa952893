use std::collections::HashSet;

use geo::LineString;

use super::Point;
use crate::error::{Result, ZoneError};

/// A closed loop of points.
///
/// The closing edge (last -> first) is implicit: if the input repeats the
/// first point at the end, the duplicate is dropped on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(ZoneError::InvalidCoordinate(format!(
                "({}, {})",
                bad.lat, bad.lon
            )));
        }

        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        let distinct = count_distinct(&points, 3);
        if distinct < 3 {
            return Err(ZoneError::InvalidRing { points: distinct });
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consecutive edges, including the closing edge back to the first point
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let closing = match (self.points.last(), self.points.first()) {
            (Some(&last), Some(&first)) => Some((last, first)),
            _ => None,
        };
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }

    pub fn edge_count(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn to_line_string(&self) -> LineString<f64> {
        self.points.iter().map(|p| p.to_coord()).collect()
    }
}

fn count_distinct(points: &[Point], enough: usize) -> usize {
    let mut seen = HashSet::new();
    for p in points {
        // + 0.0 folds -0.0 into 0.0
        seen.insert(((p.lat + 0.0).to_bits(), (p.lon + 0.0).to_bits()));
        if seen.len() >= enough {
            break;
        }
    }
    seen.len()
}

/// One outer ring plus zero or more holes
#[derive(Debug, Clone, PartialEq)]
pub struct ZonePolygon {
    pub outer: Ring,
    pub holes: Vec<Ring>,
}

impl ZonePolygon {
    pub fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        Self { outer, holes }
    }

    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    pub(crate) fn to_geo(&self) -> geo::Polygon<f64> {
        geo::Polygon::new(
            self.outer.to_line_string(),
            self.holes.iter().map(Ring::to_line_string).collect(),
        )
    }
}

/// Zone geometry, either a single polygon or several
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(ZonePolygon),
    MultiPolygon(Vec<ZonePolygon>),
}

impl Geometry {
    pub fn polygons(&self) -> &[ZonePolygon] {
        match self {
            Geometry::Polygon(polygon) => std::slice::from_ref(polygon),
            Geometry::MultiPolygon(polygons) => polygons,
        }
    }

    /// Every ring of every member polygon, outer rings and holes alike
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.polygons().iter().flat_map(ZonePolygon::rings)
    }

    pub fn for_each_ring<F: FnMut(&Ring)>(&self, f: F) {
        self.rings().for_each(f);
    }

    pub fn is_empty(&self) -> bool {
        self.polygons().is_empty()
    }

    pub(crate) fn to_geo(&self) -> geo::MultiPolygon<f64> {
        geo::MultiPolygon::new(self.polygons().iter().map(ZonePolygon::to_geo).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn test_ring_drops_closing_duplicate() {
        let ring = Ring::new(pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)])).unwrap();
        assert_eq!(ring.points().len(), 3);
        assert_eq!(ring.edge_count(), 3);
    }

    #[test]
    fn test_ring_edges_include_closing_edge() {
        let ring = Ring::new(pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)])).unwrap();
        let edges: Vec<_> = ring.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Point::new(1.0, 1.0), Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_ring_too_few_points() {
        let err = Ring::new(pts(&[(0.0, 0.0), (0.0, 1.0)])).unwrap_err();
        assert!(matches!(err, ZoneError::InvalidRing { points: 2 }));
    }

    #[test]
    fn test_ring_repeated_points_are_not_distinct() {
        let err = Ring::new(pts(&[(0.0, 0.0), (0.0, 1.0), (0.0, 1.0), (0.0, 0.0)])).unwrap_err();
        assert!(matches!(err, ZoneError::InvalidRing { points: 2 }));
    }

    #[test]
    fn test_ring_signed_zero_is_same_point() {
        let err = Ring::new(pts(&[(0.0, 0.0), (-0.0, 0.0), (1.0, 1.0)])).unwrap_err();
        assert!(matches!(err, ZoneError::InvalidRing { points: 2 }));
    }

    #[test]
    fn test_geometry_rings_flatten_multipolygon() {
        let square = |o: f64| {
            Ring::new(pts(&[(o, o), (o, o + 1.0), (o + 1.0, o + 1.0), (o + 1.0, o)])).unwrap()
        };
        let with_hole = ZonePolygon::new(square(0.0), vec![square(0.25)]);
        let plain = ZonePolygon::new(square(5.0), Vec::new());
        let geometry = Geometry::MultiPolygon(vec![with_hole, plain]);

        assert_eq!(geometry.rings().count(), 3);
        let mut visited = 0;
        geometry.for_each_ring(|_| visited += 1);
        assert_eq!(visited, 3);
    }

    #[test]
    fn test_empty_multipolygon() {
        assert!(Geometry::MultiPolygon(Vec::new()).is_empty());
    }
}
