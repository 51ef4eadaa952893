use std::path::Path;

use geojson::{Feature, GeoJson, PolygonType};

use crate::domain::{Geometry, LoadReport, Point, Ring, Zone, ZonePolygon, ZoneSet};
use crate::error::{Result, ZoneError};

/// Read a GeoJSON file into a zone set.
pub fn load_zones(path: &Path) -> Result<(ZoneSet, LoadReport)> {
    let contents = std::fs::read_to_string(path)?;
    log::debug!("Read {} bytes from {}", contents.len(), path.display());
    parse_zones(&contents)
}

/// Parse GeoJSON text into a zone set.
///
/// # Algorithm
/// 1. Accept a FeatureCollection, a single Feature, or a bare geometry
/// 2. For each feature, collect every Polygon (GeometryCollections are flattened)
/// 3. Build rings from `[lon, lat]` positions, skipping any that fail validation
///    - a bad outer ring drops its polygon
///    - a bad hole is dropped, the polygon stays
/// 4. Features left with no polygons are skipped
///
/// Malformed GeoJSON is an error; bad geometry only produces warnings in the report.
pub fn parse_zones(json: &str) -> Result<(ZoneSet, LoadReport)> {
    let geojson: GeoJson = json.parse()?;

    let features = match geojson {
        GeoJson::FeatureCollection(fc) => fc.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(geometry) => vec![Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: None,
            foreign_members: None,
        }],
    };

    let mut report = LoadReport {
        features: features.len(),
        ..Default::default()
    };
    let mut zones = Vec::new();

    for (index, feature) in features.iter().enumerate() {
        let name = feature_name(feature);
        let label = name
            .as_ref()
            .map(|n| format!("feature {} ({})", index, n))
            .unwrap_or_else(|| format!("feature {}", index));

        let geometry = match &feature.geometry {
            Some(g) => &g.value,
            None => {
                report.skipped_features += 1;
                report.warn(format!("{}: no geometry", label));
                continue;
            }
        };

        let mut polygons = Vec::new();
        let multi = collect_polygons(geometry, &label, &mut polygons, &mut report);

        if polygons.is_empty() {
            report.skipped_features += 1;
            report.warn(format!(
                "{}: no usable polygons in {} geometry",
                label,
                type_name(geometry)
            ));
            continue;
        }

        let geometry = if multi || polygons.len() > 1 {
            Geometry::MultiPolygon(polygons)
        } else {
            Geometry::Polygon(polygons.remove(0))
        };

        match Zone::new(name, geometry) {
            Ok(zone) => zones.push(zone),
            Err(e) => {
                report.skipped_features += 1;
                report.warn(format!("{}: {}", label, e));
            }
        }
    }

    report.zones = zones.len();
    log::info!("{}", report.summary());

    Ok((ZoneSet::new(zones), report))
}

fn feature_name(feature: &Feature) -> Option<String> {
    feature
        .property("name")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

fn type_name(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Push every valid polygon in `value` onto `out`.
///
/// Returns whether the source was a multi-geometry.
fn collect_polygons(
    value: &geojson::Value,
    label: &str,
    out: &mut Vec<ZonePolygon>,
    report: &mut LoadReport,
) -> bool {
    match value {
        geojson::Value::Polygon(rings) => {
            if let Some(polygon) = build_polygon(rings, label, report) {
                out.push(polygon);
            }
            false
        }
        geojson::Value::MultiPolygon(polygons) => {
            for (i, rings) in polygons.iter().enumerate() {
                let member = format!("{} polygon {}", label, i);
                if let Some(polygon) = build_polygon(rings, &member, report) {
                    out.push(polygon);
                }
            }
            true
        }
        geojson::Value::GeometryCollection(geometries) => {
            for member in geometries {
                collect_polygons(&member.value, label, out, report);
            }
            true
        }
        other => {
            let err = ZoneError::UnsupportedGeometry(type_name(other).to_string());
            report.warn(format!("{}: {}", label, err));
            false
        }
    }
}

fn build_polygon(rings: &PolygonType, label: &str, report: &mut LoadReport) -> Option<ZonePolygon> {
    let Some((outer, holes)) = rings.split_first() else {
        report.skipped_polygons += 1;
        report.warn(format!("{}: {}", label, ZoneError::EmptyPolygon));
        return None;
    };

    let outer = match build_ring(outer) {
        Ok(ring) => ring,
        Err(e) => {
            report.skipped_rings += 1;
            report.skipped_polygons += 1;
            report.warn(format!("{}: outer ring: {}", label, e));
            return None;
        }
    };

    let mut kept = Vec::with_capacity(holes.len());
    for (i, hole) in holes.iter().enumerate() {
        match build_ring(hole) {
            Ok(ring) => kept.push(ring),
            Err(e) => {
                report.skipped_rings += 1;
                report.warn(format!("{}: hole {}: {}", label, i, e));
            }
        }
    }

    Some(ZonePolygon::new(outer, kept))
}

fn build_ring(positions: &[geojson::Position]) -> Result<Ring> {
    let points = positions
        .iter()
        .map(|p| Point::from_lon_lat(p))
        .collect::<Result<Vec<_>>>()?;
    Ring::new(points)
}
