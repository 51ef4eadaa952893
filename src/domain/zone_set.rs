use geo::{BoundingRect, MultiPolygon, Rect};

use super::Geometry;
use crate::error::{Result, ZoneError};

/// A named permitted area.
///
/// The planar `geo` shape (x = lon, y = lat) and its bounding box are built
/// once here so containment queries don't rebuild them.
#[derive(Debug, Clone)]
pub struct Zone {
    name: Option<String>,
    geometry: Geometry,
    shape: MultiPolygon<f64>,
    bounds: Option<Rect<f64>>,
}

impl Zone {
    pub fn new(name: Option<String>, geometry: Geometry) -> Result<Self> {
        if geometry.is_empty() {
            return Err(ZoneError::EmptyPolygon);
        }
        let shape = geometry.to_geo();
        let bounds = shape.bounding_rect();
        Ok(Self {
            name,
            geometry,
            shape,
            bounds,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn shape(&self) -> &MultiPolygon<f64> {
        &self.shape
    }

    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.bounds
    }

    pub fn edge_count(&self) -> usize {
        self.geometry.rings().map(|r| r.edge_count()).sum()
    }
}

/// All permitted zones. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct ZoneSet {
    zones: Vec<Zone>,
}

impl ZoneSet {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Zone> {
        self.zones.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.zones.iter().map(Zone::edge_count).sum()
    }
}

impl<'a> IntoIterator for &'a ZoneSet {
    type Item = &'a Zone;
    type IntoIter = std::slice::Iter<'a, Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// What happened while turning external geometry into a [`ZoneSet`].
///
/// Bad rings, polygons and features are skipped rather than failing the
/// whole load; each skip leaves a warning here.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Features (or bare geometries) seen in the input
    pub features: usize,
    /// Zones that made it into the set
    pub zones: usize,
    pub skipped_rings: usize,
    pub skipped_polygons: usize,
    pub skipped_features: usize,
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn has_issues(&self) -> bool {
        self.skipped_rings > 0 || self.skipped_polygons > 0 || self.skipped_features > 0
    }

    pub fn summary(&self) -> String {
        if !self.has_issues() {
            format!("Loaded {} zones from {} features", self.zones, self.features)
        } else {
            format!(
                "Loaded {} zones from {} features ({} rings, {} polygons, {} features skipped)",
                self.zones,
                self.features,
                self.skipped_rings,
                self.skipped_polygons,
                self.skipped_features
            )
        }
    }

    pub(crate) fn warn(&mut self, message: String) {
        log::warn!("{}", message);
        self.warnings.push(message);
    }
}
