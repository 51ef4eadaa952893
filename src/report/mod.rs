//! Turning a [`ProximityResult`] into output for the caller.

pub mod format;

pub use format::format_distance;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ZoneError;
use crate::fence::{Proximity, ProximityResult};

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Full sentence with distance and direction
    #[default]
    Message,
    /// Just `inside` or `outside`
    Silent,
    /// Structured result as JSON
    Json,
}

pub const INSIDE_MESSAGE: &str = "✅ You ARE inside a zone where billboards are permitted.";
pub const NO_GEOMETRY_MESSAGE: &str = "❌ You are NOT inside a permitted zone (no geometry found).";
pub const LOAD_FAILED_MESSAGE: &str = "Couldn't load zone data.";

pub fn outside_message(proximity: &Proximity) -> String {
    format!(
        "❌ You are NOT inside a permitted zone. Nearest zone is {} to the {}.",
        format_distance(proximity.distance_m),
        proximity.direction
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    inside: bool,
    #[serde(flatten)]
    proximity: Option<&'a Proximity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_distance: Option<String>,
}

impl<'a> From<&'a ProximityResult> for JsonReport<'a> {
    fn from(result: &'a ProximityResult) -> Self {
        match result {
            ProximityResult::Inside => Self {
                inside: true,
                proximity: None,
                display_distance: None,
            },
            ProximityResult::Outside(p) => Self {
                inside: false,
                proximity: Some(p),
                display_distance: Some(format_distance(p.distance_m)),
            },
            ProximityResult::NoGeometry => Self {
                inside: false,
                proximity: None,
                display_distance: None,
            },
        }
    }
}

/// Render a result in the given mode.
pub fn render(result: &ProximityResult, mode: OutputMode) -> String {
    match mode {
        OutputMode::Message => match result {
            ProximityResult::Inside => INSIDE_MESSAGE.to_string(),
            ProximityResult::Outside(p) => outside_message(p),
            ProximityResult::NoGeometry => NO_GEOMETRY_MESSAGE.to_string(),
        },
        OutputMode::Silent => silent(result.is_inside()).to_string(),
        OutputMode::Json => render_json(result),
    }
}

pub fn silent(inside: bool) -> &'static str {
    if inside { "inside" } else { "outside" }
}

/// Output for a zone file that couldn't be loaded.
///
/// Silent mode still answers, with `outside`; the other modes fail with
/// [`LOAD_FAILED_MESSAGE`] wrapping the cause.
pub fn load_failure(error: ZoneError, path: &Path, mode: OutputMode) -> anyhow::Result<String> {
    if mode == OutputMode::Silent {
        log::error!("Error loading {}: {}", path.display(), error);
        return Ok(silent(false).to_string());
    }
    Err(anyhow::Error::new(error).context(format!(
        "{} ({})",
        LOAD_FAILED_MESSAGE,
        path.display()
    )))
}

fn render_json(result: &ProximityResult) -> String {
    let report = JsonReport::from(result);
    serde_json::to_string(&report).unwrap_or_else(|e| {
        log::error!("Failed to serialize result: {}", e);
        format!("{{\"inside\":{}}}", result.is_inside())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;
    use crate::geometry::Direction;

    fn outside() -> ProximityResult {
        ProximityResult::Outside(Proximity {
            distance_m: 675.9,
            bearing_deg: 44.0,
            direction: Direction::NE,
            nearest: Point::new(36.1, -86.8),
            zone: Some("Downtown".to_string()),
        })
    }

    #[test]
    fn test_message_mode() {
        assert_eq!(
            render(&ProximityResult::Inside, OutputMode::Message),
            "✅ You ARE inside a zone where billboards are permitted."
        );
        assert_eq!(
            render(&outside(), OutputMode::Message),
            "❌ You are NOT inside a permitted zone. Nearest zone is 2,218 ft to the NE."
        );
        assert_eq!(
            render(&ProximityResult::NoGeometry, OutputMode::Message),
            "❌ You are NOT inside a permitted zone (no geometry found)."
        );
    }

    #[test]
    fn test_silent_mode() {
        assert_eq!(render(&ProximityResult::Inside, OutputMode::Silent), "inside");
        assert_eq!(render(&outside(), OutputMode::Silent), "outside");
        assert_eq!(render(&ProximityResult::NoGeometry, OutputMode::Silent), "outside");
    }

    #[test]
    fn test_json_mode() {
        let inside: serde_json::Value =
            serde_json::from_str(&render(&ProximityResult::Inside, OutputMode::Json)).unwrap();
        assert_eq!(inside, serde_json::json!({"inside": true}));

        let out: serde_json::Value =
            serde_json::from_str(&render(&outside(), OutputMode::Json)).unwrap();
        assert_eq!(out["inside"], false);
        assert_eq!(out["direction"], "NE");
        assert_eq!(out["zone"], "Downtown");
        assert_eq!(out["nearest"]["lat"], 36.1);
        assert_eq!(out["display_distance"], "2,218 ft");

        let none: serde_json::Value =
            serde_json::from_str(&render(&ProximityResult::NoGeometry, OutputMode::Json)).unwrap();
        assert_eq!(none, serde_json::json!({"inside": false}));
    }

    #[test]
    fn test_load_failure_silent_prints_outside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.geojson");
        let err = crate::geojson::load_zones(&path).unwrap_err();

        let out = load_failure(err, &path, OutputMode::Silent).unwrap();
        assert_eq!(out, "outside");
    }

    #[test]
    fn test_load_failure_message_mode_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.geojson");

        for mode in [OutputMode::Message, OutputMode::Json] {
            let err = crate::geojson::load_zones(&path).unwrap_err();
            let failure = load_failure(err, &path, mode).unwrap_err();
            assert!(failure.to_string().contains(LOAD_FAILED_MESSAGE));
            assert!(format!("{:#}", failure).contains("failed to read zone file"));
        }
    }

    #[test]
    fn test_output_mode_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: OutputMode,
        }
        let w: Wrapper = toml::from_str("mode = \"silent\"").unwrap();
        assert_eq!(w.mode, OutputMode::Silent);
    }
}
