//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use std::path::PathBuf;

use super::settings::*;
use crate::assessment::{DEFAULT_HAZARD_RADIUS_KM, DEFAULT_PROXIMITY_THRESHOLD_KM};
use crate::hazard::feed::{
    DEFAULT_MIN_MAGNITUDE, DEFAULT_TIMEOUT_SECS, DEFAULT_USGS_URL, DEFAULT_WINDOW_HOURS,
};

/// Longest look-back the USGS service is queried for (30 days).
pub const MAX_WINDOW_HOURS: u32 = 720;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE: &str = "hazardroute.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            routing: RoutingSettings {
                proximity_threshold_km: DEFAULT_PROXIMITY_THRESHOLD_KM,
                hazard_radius_km: DEFAULT_HAZARD_RADIUS_KM,
                source: None,
                destination: None,
            },
            feed: FeedSettings {
                url: DEFAULT_USGS_URL.to_string(),
                min_magnitude: DEFAULT_MIN_MAGNITUDE,
                window_hours: DEFAULT_WINDOW_HOURS,
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            logging: LoggingSettings {
                file: default_log_path(),
            },
        }
    }
}

/// Default log file location (~/.hazardroute/logs/hazardroute.log).
pub fn default_log_path() -> PathBuf {
    super::file::config_directory()
        .join("logs")
        .join(DEFAULT_LOG_FILE)
}
