//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization, and the graph and
//! feed setup shared by the command handlers.

use std::path::{Path, PathBuf};

use hazardroute::config::{ConfigFile, DEFAULT_LOG_FILE};
use hazardroute::facility::FacilityLoader;
use hazardroute::graph::{BuildOutcome, GraphBuilder};
use hazardroute::hazard::feed::{GeoJsonFileFeed, HazardFeed, ReqwestClient, UsgsFeed};
use hazardroute::logging::{init_logging_full, split_log_path, LoggingGuard};
use tracing::info;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Load config and initialize logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Config file to use instead of ~/.hazardroute/config.ini
    /// * `debug_mode` - Enables debug-level logging on stderr regardless of RUST_LOG
    pub fn new(config_path: Option<&Path>, debug_mode: bool) -> Result<Self, CliError> {
        let config = match config_path {
            Some(path) => ConfigFile::load_from(path)?,
            None => ConfigFile::load()?,
        };

        let (log_dir, log_file) = split_log_path(&config.logging.file, DEFAULT_LOG_FILE);

        let logging_guard = init_logging_full(&log_dir, &log_file, debug_mode, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("HazardRoute v{}", hazardroute::VERSION);
        info!("HazardRoute CLI: {} command", command);
    }

    /// Load facilities and build the proximity graph.
    ///
    /// Rejected records are reported on stderr; the rest of the file still builds.
    pub fn build_graph(&self, facilities: &Path, threshold_km: f64) -> Result<BuildOutcome, CliError> {
        let records = FacilityLoader::from_path(facilities)?;
        let outcome = GraphBuilder::new(threshold_km).build(records);
        report_rejected(&outcome);
        Ok(outcome)
    }

    /// Load facilities as unlinked nodes, for commands that never route.
    pub fn load_facilities(&self, facilities: &Path) -> Result<BuildOutcome, CliError> {
        let records = FacilityLoader::from_path(facilities)?;
        let outcome = GraphBuilder::insert_records(records);
        report_rejected(&outcome);
        Ok(outcome)
    }

    /// Pick the hazard feed: a saved GeoJSON file when given, otherwise the
    /// live USGS service at the configured URL.
    pub fn hazard_feed(&self, hazards: Option<&PathBuf>) -> Result<Box<dyn HazardFeed>, CliError> {
        match hazards {
            Some(path) => {
                info!(path = %path.display(), "Using saved hazard feed");
                Ok(Box::new(GeoJsonFileFeed::new(path)))
            }
            None => {
                let feed = &self.config.feed;
                let client = ReqwestClient::with_timeout(feed.timeout).map_err(|source| {
                    CliError::Feed {
                        feed: "usgs".to_string(),
                        source,
                    }
                })?;
                info!(url = %feed.url, timeout = feed.timeout, "Using USGS hazard feed");
                Ok(Box::new(UsgsFeed::with_url(client, feed.url.clone())))
            }
        }
    }
}

fn report_rejected(outcome: &BuildOutcome) {
    for rejected in &outcome.rejected {
        eprintln!(
            "Warning: skipped facility '{}' ({}): {}",
            rejected.record.id, rejected.record.name, rejected.error
        );
    }
}
