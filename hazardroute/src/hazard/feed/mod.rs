//! Hazard event sources.
//!
//! The [`HazardFeed`] trait abstracts over where hazard events come from so
//! that the assessment workflow can run against the live USGS service, a
//! saved GeoJSON file, or a fixed list in tests.
//!
//! Feed failures are surfaced as [`FeedError`] and never retried or replaced
//! with an empty list: classifying risk without hazard data would report
//! facilities as safe when nothing is known.

mod error;
mod geojson;
mod http;
mod usgs;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::HazardEvent;

pub use error::FeedError;
pub use geojson::parse_feature_collection;
pub use http::{HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use usgs::{UsgsFeed, DEFAULT_USGS_URL};

/// Default minimum magnitude for feed queries.
pub const DEFAULT_MIN_MAGNITUDE: f64 = 4.5;

/// Default look-back window in hours.
pub const DEFAULT_WINDOW_HOURS: u32 = 24;

/// Parameters for one feed query.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedQuery {
    /// Smallest magnitude to include.
    pub min_magnitude: f64,
    /// Length of the window ending at `end_time`.
    pub window_hours: u32,
    /// End of the window; `None` means now.
    pub end_time: Option<DateTime<Utc>>,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
            window_hours: DEFAULT_WINDOW_HOURS,
            end_time: None,
        }
    }
}

impl FeedQuery {
    pub fn new(min_magnitude: f64, window_hours: u32) -> Self {
        Self {
            min_magnitude,
            window_hours,
            end_time: None,
        }
    }
}

/// Source of hazard events for one assessment cycle.
pub trait HazardFeed: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &str;

    /// Fetch the finite list of events matching `query`.
    fn fetch(&self, query: &FeedQuery) -> Result<Vec<HazardEvent>, FeedError>;

    /// Whether `fetch` honours `window_hours`.
    fn applies_time_window(&self) -> bool {
        true
    }
}

/// Feed that reads a saved USGS GeoJSON document.
///
/// Only the magnitude filter is applied: a saved file is a snapshot, so its
/// events are not compared against the current clock.
#[derive(Debug, Clone)]
pub struct GeoJsonFileFeed {
    path: PathBuf,
}

impl GeoJsonFileFeed {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HazardFeed for GeoJsonFileFeed {
    fn name(&self) -> &str {
        "geojson-file"
    }

    fn applies_time_window(&self) -> bool {
        false
    }

    fn fetch(&self, query: &FeedQuery) -> Result<Vec<HazardEvent>, FeedError> {
        let bytes = std::fs::read(&self.path)
            .map_err(|e| FeedError::Io(format!("{}: {}", self.path.display(), e)))?;
        let events: Vec<HazardEvent> = parse_feature_collection(&bytes)?
            .into_iter()
            .filter(|event| event.magnitude >= query.min_magnitude)
            .collect();

        tracing::info!(
            path = %self.path.display(),
            count = events.len(),
            min_magnitude = query.min_magnitude,
            "Loaded hazard events from file"
        );

        Ok(events)
    }
}

/// Feed over a fixed list of events, filtered by magnitude.
#[derive(Debug, Clone, Default)]
pub struct StaticFeed {
    events: Vec<HazardEvent>,
}

impl StaticFeed {
    pub fn new(events: Vec<HazardEvent>) -> Self {
        Self { events }
    }
}

impl HazardFeed for StaticFeed {
    fn name(&self) -> &str {
        "static"
    }

    fn applies_time_window(&self) -> bool {
        false
    }

    fn fetch(&self, query: &FeedQuery) -> Result<Vec<HazardEvent>, FeedError> {
        Ok(self
            .events
            .iter()
            .filter(|event| event.magnitude >= query.min_magnitude)
            .cloned()
            .collect())
    }
}
