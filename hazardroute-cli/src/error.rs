//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use hazardroute::assessment::AssessmentError;
use hazardroute::config::ConfigFileError;
use hazardroute::facility::FacilityError;
use hazardroute::hazard::feed::FeedError;
use hazardroute::routing::RouteError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to load the facility CSV
    Facilities(FacilityError),
    /// Hazard feed failed; the cycle was abandoned
    Feed { feed: String, source: FeedError },
    /// Source or destination not in the graph
    Route(RouteError),
    /// Failed to serialize output
    Output(String),
    /// Failed to write output file
    FileWrite {
        path: PathBuf,
        error: std::io::Error,
    },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Feed {
                source: FeedError::Http(_) | FeedError::Status { .. },
                ..
            } => {
                eprintln!();
                eprintln!("The hazard feed could not be reached. Either:");
                eprintln!("  1. Check your network connection and the [feed] url in config.ini");
                eprintln!("  2. Run offline with a saved feed: --hazards <file.geojson>");
            }
            CliError::Facilities(FacilityError::InvalidRecord { .. }) => {
                eprintln!();
                eprintln!("Facility files are CSV with the header: id,name,lat,lon");
            }
            CliError::Route(_) => {
                eprintln!();
                eprintln!("Use 'hazardroute graph --facilities <csv>' to list facility ids.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Facilities(e) => write!(f, "Failed to load facilities: {}", e),
            CliError::Feed { feed, source } => {
                write!(f, "Hazard feed '{}' failed: {}", feed, source)
            }
            CliError::Route(e) => write!(f, "{}", e),
            CliError::Output(msg) => write!(f, "Failed to produce output: {}", msg),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path.display(), error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Facilities(e) => Some(e),
            CliError::Feed { source, .. } => Some(source),
            CliError::Route(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<FacilityError> for CliError {
    fn from(e: FacilityError) -> Self {
        CliError::Facilities(e)
    }
}

impl From<RouteError> for CliError {
    fn from(e: RouteError) -> Self {
        CliError::Route(e)
    }
}

impl From<AssessmentError> for CliError {
    fn from(e: AssessmentError) -> Self {
        match e {
            AssessmentError::Feed { feed, source } => CliError::Feed { feed, source },
            AssessmentError::Route(e) => CliError::Route(e),
            AssessmentError::Serialize(msg) => CliError::Output(msg),
            AssessmentError::Write { path, source } => CliError::FileWrite {
                path,
                error: source,
            },
        }
    }
}
