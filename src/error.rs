use thiserror::Error;

/// Errors raised while building or loading zone geometry.
///
/// Evaluation itself never fails; these only surface while turning external
/// input into a [`ZoneSet`](crate::domain::ZoneSet).
#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("ring has {points} distinct points, at least 3 are required")]
    InvalidRing { points: usize },

    #[error("polygon has no rings")]
    EmptyPolygon,

    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(String),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("failed to parse GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("failed to read zone file: {0}")]
    Io(#[from] std::io::Error),

    #[error("zone set has already been installed")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, ZoneError>;
