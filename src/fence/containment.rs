use geo::Intersects;

use crate::domain::{Point, Zone, ZoneSet};

/// Whether `point` lies in the closed region of `zone`.
///
/// Points on an edge count as inside, including edges of holes (they are
/// still part of the polygon's boundary). Planar test in lon/lat space.
pub fn zone_contains(zone: &Zone, point: Point) -> bool {
    let coord = point.to_coord();

    match zone.bounds() {
        Some(bounds) if bounds.intersects(&coord) => {}
        _ => return false,
    }

    zone.shape()
        .0
        .iter()
        .any(|polygon| polygon.intersects(&coord))
}

/// Whether `point` lies inside any zone of the set. False for an empty set.
pub fn contains(point: Point, zones: &ZoneSet) -> bool {
    zones.iter().any(|zone| zone_contains(zone, point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Geometry, Ring, ZonePolygon};

    fn square(south: f64, west: f64, north: f64, east: f64) -> Ring {
        Ring::new(vec![
            Point::new(south, west),
            Point::new(south, east),
            Point::new(north, east),
            Point::new(north, west),
            Point::new(south, west),
        ])
        .unwrap()
    }

    fn zone(geometry: Geometry) -> Zone {
        Zone::new(None, geometry).unwrap()
    }

    fn nashville() -> ZoneSet {
        let polygon = ZonePolygon::new(square(36.10, -86.85, 36.20, -86.75), Vec::new());
        ZoneSet::new(vec![zone(Geometry::Polygon(polygon))])
    }

    #[test]
    fn test_point_inside_square() {
        assert!(contains(Point::new(36.15, -86.80), &nashville()));
    }

    #[test]
    fn test_strictly_inside_convex_polygon() {
        let zones = nashville();
        for lat in [36.101, 36.13, 36.17, 36.199] {
            for lon in [-86.849, -86.80, -86.751] {
                assert!(contains(Point::new(lat, lon), &zones), "({lat}, {lon})");
            }
        }
    }

    #[test]
    fn test_outside_bounding_box() {
        let zones = nashville();
        for (lat, lon) in [(36.0, -86.8), (36.3, -86.8), (36.15, -87.0), (36.15, -86.5)] {
            assert!(!contains(Point::new(lat, lon), &zones), "({lat}, {lon})");
        }
    }

    #[test]
    fn test_boundary_is_inside() {
        let zones = nashville();
        // On an edge
        assert!(contains(Point::new(36.10, -86.80), &zones));
        assert!(contains(Point::new(36.15, -86.75), &zones));
        // On a vertex
        assert!(contains(Point::new(36.20, -86.85), &zones));
    }

    #[test]
    fn test_hole_excludes_point() {
        let polygon = ZonePolygon::new(
            square(0.0, 0.0, 10.0, 10.0),
            vec![square(4.0, 4.0, 6.0, 6.0)],
        );
        let zones = ZoneSet::new(vec![zone(Geometry::Polygon(polygon))]);

        assert!(!contains(Point::new(5.0, 5.0), &zones));
        assert!(contains(Point::new(2.0, 2.0), &zones));
        // Hole edge is polygon boundary
        assert!(contains(Point::new(4.0, 5.0), &zones));
    }

    #[test]
    fn test_multipolygon_any_member() {
        let geometry = Geometry::MultiPolygon(vec![
            ZonePolygon::new(square(0.0, 0.0, 1.0, 1.0), Vec::new()),
            ZonePolygon::new(square(5.0, 5.0, 6.0, 6.0), Vec::new()),
        ]);
        let zones = ZoneSet::new(vec![zone(geometry)]);

        assert!(contains(Point::new(0.5, 0.5), &zones));
        assert!(contains(Point::new(5.5, 5.5), &zones));
        assert!(!contains(Point::new(3.0, 3.0), &zones));
    }

    #[test]
    fn test_concave_polygon_notch() {
        // U shape: the notch between the arms is outside even though it is
        // inside the bounding box
        let ring = Ring::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(3.0, 3.0),
            Point::new(3.0, 2.0),
            Point::new(1.0, 2.0),
            Point::new(1.0, 1.0),
            Point::new(3.0, 1.0),
            Point::new(3.0, 0.0),
        ])
        .unwrap();
        let zones = ZoneSet::new(vec![zone(Geometry::Polygon(ZonePolygon::new(
            ring,
            Vec::new(),
        )))]);

        assert!(!contains(Point::new(2.0, 1.5), &zones));
        assert!(contains(Point::new(0.5, 1.5), &zones));
        assert!(contains(Point::new(2.0, 2.5), &zones));
    }

    #[test]
    fn test_empty_zone_set() {
        assert!(!contains(Point::new(0.0, 0.0), &ZoneSet::default()));
    }
}
