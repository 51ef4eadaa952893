use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::fence::SamplingResolution;
use crate::report::OutputMode;

/// Zone file used when neither the CLI nor a config file names one
pub const DEFAULT_ZONES_FILE: &str = "zones.geojson";

fn default_zones() -> PathBuf {
    PathBuf::from(DEFAULT_ZONES_FILE)
}
fn default_sample_steps() -> u32 {
    SamplingResolution::DEFAULT_STEPS
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_zones")]
    pub zones: PathBuf,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub mode: OutputMode,
    #[serde(default = "default_sample_steps")]
    pub sample_steps: u32,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            zones: default_zones(),
            lat: None,
            lon: None,
            mode: OutputMode::default(),
            sample_steps: default_sample_steps(),
            verbose: false,
        }
    }
}

impl FileConfig {
    /// First parseable config file on the search path, if any
    pub fn load() -> Option<Self> {
        Self::load_from(&get_config_paths())
    }

    pub fn load_from(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        log::debug!("Using config file {}", path.display());
                        return Some(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to parse config file {}: {}", path.display(), e);
                    }
                }
            }
        }
        None
    }

    /// Read one specific config file; missing or malformed files are errors
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("zonecheck.toml"));
    paths.push(PathBuf::from(".zonecheck.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("zonecheck").join("config.toml"));
        paths.push(config_dir.join("zonecheck.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".zonecheck.toml"));
        paths.push(home.join(".config").join("zonecheck").join("config.toml"));
    }

    paths
}
