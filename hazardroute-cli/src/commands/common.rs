//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;

use clap::Args;
use hazardroute::config::{ConfigFile, MAX_WINDOW_HOURS};
use hazardroute::hazard::feed::FeedQuery;

use crate::error::CliError;

/// Hazard snapshot options shared by `route` and `risk`.
#[derive(Debug, Clone, Default, Args)]
pub struct HazardArgs {
    /// Saved GeoJSON feed to use instead of querying USGS
    #[arg(long, value_name = "GEOJSON")]
    pub hazards: Option<PathBuf>,

    /// Danger radius around each hazard in km [config: routing.hazard_radius_km]
    #[arg(long, value_name = "KM")]
    pub radius_km: Option<f64>,

    /// Smallest magnitude to consider [config: feed.min_magnitude]
    #[arg(long, value_name = "MAG")]
    pub min_magnitude: Option<f64>,

    /// Look-back window in hours [config: feed.window_hours]
    #[arg(long, value_name = "HOURS")]
    pub window_hours: Option<u32>,
}

impl HazardArgs {
    /// Danger radius from the flag, falling back to config.
    pub fn radius_km(&self, config: &ConfigFile) -> Result<f64, CliError> {
        let radius = self.radius_km.unwrap_or(config.routing.hazard_radius_km);
        check_distance("--radius-km", radius)
    }

    /// Feed query from the flags, falling back to config.
    pub fn query(&self, config: &ConfigFile) -> Result<FeedQuery, CliError> {
        let window_hours = self.window_hours.unwrap_or(config.feed.window_hours);
        if window_hours == 0 || window_hours > MAX_WINDOW_HOURS {
            return Err(CliError::Config(format!(
                "--window-hours must be between 1 and {}, got {}",
                MAX_WINDOW_HOURS, window_hours
            )));
        }
        let min_magnitude = self.min_magnitude.unwrap_or(config.feed.min_magnitude);
        // NaN would compare false against every event and drop them all
        if !min_magnitude.is_finite() {
            return Err(CliError::Config(format!(
                "--min-magnitude must be a finite number, got {}",
                min_magnitude
            )));
        }
        Ok(FeedQuery::new(min_magnitude, window_hours))
    }
}

/// Proximity threshold from the flag, falling back to config.
pub fn resolve_threshold(flag: Option<f64>, config: &ConfigFile) -> Result<f64, CliError> {
    let threshold = flag.unwrap_or(config.routing.proximity_threshold_km);
    check_distance("--threshold-km", threshold)
}

fn check_distance(flag: &str, km: f64) -> Result<f64, CliError> {
    if km.is_finite() && km >= 0.0 {
        Ok(km)
    } else {
        Err(CliError::Config(format!(
            "{} must be a non-negative number of kilometers, got {}",
            flag, km
        )))
    }
}
