use anyhow::{Context, Result, bail};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Instant;

use zonecheck::config::FileConfig;
use zonecheck::domain::{Point, registry};
use zonecheck::fence::{Geofence, SamplingResolution};
use zonecheck::geojson::load_zones;
use zonecheck::report::{self, OutputMode, render};

/// Check whether a location is inside a permitted zone
///
/// Examples:
///   # Check a point against zones.geojson in the current directory
///   zonecheck --lat 36.15 --lon -86.80
///
///   # Print only "inside" or "outside"
///   zonecheck --zones city-zones.geojson --lat 36.0 --lon -86.8 --mode silent
///
///   # Structured output with finer edge sampling
///   zonecheck --lat 36.0 --lon -86.8 --mode json --sample-steps 100
///
///   # Use a config file
///   zonecheck --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "zonecheck")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches zonecheck.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// GeoJSON file with the permitted zones (defaults to zones.geojson)
    #[arg(short = 'z', long)]
    zones: Option<PathBuf>,

    /// Latitude of the location to check (use with --lon)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude of the location to check (use with --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Output mode: message, silent (inside/outside only), or json
    #[arg(short = 'm', long, value_enum)]
    mode: Option<OutputMode>,

    /// Samples per zone edge when searching for the nearest boundary (10 = every 10% of an edge)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=1000))]
    sample_steps: Option<u32>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    // RUST_LOG wins; otherwise --verbose / config `verbose` pick the level
    let env_filter = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    if !env_filter {
        log::set_max_level(level(args.verbose));
    }

    let file_config = match args.config {
        Some(ref path) => FileConfig::read(path)?,
        None => FileConfig::load().unwrap_or_default(),
    };

    let verbose = args.verbose || file_config.verbose;
    if !env_filter {
        log::set_max_level(level(verbose));
    }

    let zones_path = args.zones.clone().unwrap_or(file_config.zones.clone());
    let mode = args.mode.unwrap_or(file_config.mode);
    let steps = args.sample_steps.unwrap_or(file_config.sample_steps);
    let lat = args.lat.or(file_config.lat);
    let lon = args.lon.or(file_config.lon);

    let point = match (lat, lon) {
        (Some(lat), Some(lon)) => Point::new(lat, lon),
        _ => bail!("Must provide --lat and --lon, or set lat and lon in the config file"),
    };
    if !(-90.0..=90.0).contains(&point.lat) || !(-180.0..=180.0).contains(&point.lon) {
        bail!(
            "Coordinates out of range: ({}, {}); latitude must be within ±90 and longitude within ±180",
            point.lat,
            point.lon
        );
    }

    log::debug!(
        "Configuration: zones={} point=({:.6}, {:.6}) mode={:?} sample_steps={}",
        zones_path.display(),
        point.lat,
        point.lon,
        mode,
        steps
    );

    let start = Instant::now();
    let (zone_set, load_report) = match load_zones(&zones_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("{}", report::load_failure(e, &zones_path, mode)?);
            return Ok(());
        }
    };
    log::info!(
        "{} [{:.1}ms]",
        load_report.summary(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let zones = registry::install(zone_set).context("Failed to install zone set")?;
    log::debug!("{} zones, {} edges", zones.len(), zones.edge_count());

    let fence = Geofence::new(zones).with_resolution(SamplingResolution::new(steps));
    let result = fence.evaluate(point);

    println!("{}", render(&result, mode));

    log::debug!(
        "Done in {:.1}ms",
        total_start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}

fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}
