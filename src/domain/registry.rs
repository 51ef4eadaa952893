//! Process-wide zone set.
//!
//! The host installs the zones once during startup; every query afterwards
//! reads the same immutable set without locking.

use std::sync::OnceLock;

use super::ZoneSet;
use crate::error::{Result, ZoneError};

static ZONES: OnceLock<ZoneSet> = OnceLock::new();

/// Install the global zone set. Fails if one is already installed.
pub fn install(zones: ZoneSet) -> Result<&'static ZoneSet> {
    ZONES
        .set(zones)
        .map_err(|_| ZoneError::AlreadyInitialized)?;
    log::debug!("Installed global zone set");
    ZONES.get().ok_or(ZoneError::AlreadyInitialized)
}

/// The installed zone set, if any
pub fn zones() -> Option<&'static ZoneSet> {
    ZONES.get()
}
