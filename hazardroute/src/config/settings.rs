//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Graph and risk parameters
    pub routing: RoutingSettings,
    /// Hazard feed settings
    pub feed: FeedSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Routing configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingSettings {
    /// Facilities closer than this are linked, in kilometers
    pub proximity_threshold_km: f64,
    /// Facilities this close to a hazard are risky, in kilometers
    pub hazard_radius_km: f64,
    /// Default source facility id
    pub source: Option<String>,
    /// Default destination facility id
    pub destination: Option<String>,
}

/// Hazard feed configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSettings {
    /// FDSN event query endpoint
    pub url: String,
    /// Smallest magnitude to fetch
    pub min_magnitude: f64,
    /// Look-back window in hours
    pub window_hours: u32,
    /// HTTP timeout in seconds
    pub timeout: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
