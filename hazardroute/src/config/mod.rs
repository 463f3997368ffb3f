//! Configuration for HazardRoute.
//!
//! Settings live in `~/.hazardroute/config.ini`. A missing file means
//! defaults; command-line flags override whatever the file says.
//!
//! ```ini
//! [routing]
//! proximity_threshold_km = 600
//! hazard_radius_km = 200
//!
//! [feed]
//! min_magnitude = 4.5
//! window_hours = 24
//! ```
//!
//! # Example
//!
//! ```
//! use hazardroute::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.routing.proximity_threshold_km, 600.0);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{default_log_path, DEFAULT_LOG_FILE, MAX_WINDOW_HOURS};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, FeedSettings, LoggingSettings, RoutingSettings};
