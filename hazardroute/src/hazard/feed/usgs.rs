//! USGS FDSN event service client.

use chrono::{DateTime, Duration, Utc};

use super::error::FeedError;
use super::geojson::parse_feature_collection;
use super::http::HttpClient;
use super::{FeedQuery, HazardFeed};
use crate::hazard::HazardEvent;

/// Default FDSN event query endpoint.
pub const DEFAULT_USGS_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// Earthquake feed backed by the USGS FDSN event web service.
pub struct UsgsFeed<C: HttpClient> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> UsgsFeed<C> {
    /// Create a feed against the public USGS endpoint.
    pub fn new(client: C) -> Self {
        Self::with_url(client, DEFAULT_USGS_URL)
    }

    /// Create a feed against a custom endpoint (mirrors, test servers).
    pub fn with_url(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the query URL for a time window ending at `end`.
    pub fn query_url(&self, query: &FeedQuery, end: DateTime<Utc>) -> String {
        let start = end - Duration::hours(i64::from(query.window_hours));
        format!(
            "{}?format=geojson&starttime={}&endtime={}&minmagnitude={}",
            self.base_url,
            start.format("%Y-%m-%dT%H:%M:%S"),
            end.format("%Y-%m-%dT%H:%M:%S"),
            query.min_magnitude
        )
    }
}

impl<C: HttpClient> HazardFeed for UsgsFeed<C> {
    fn name(&self) -> &str {
        "usgs"
    }

    fn fetch(&self, query: &FeedQuery) -> Result<Vec<HazardEvent>, FeedError> {
        let end = query.end_time.unwrap_or_else(Utc::now);
        let url = self.query_url(query, end);

        tracing::debug!(url = %url, "Querying USGS event feed");
        let body = self.client.get(&url)?;
        let events = parse_feature_collection(&body)?;

        tracing::info!(
            count = events.len(),
            min_magnitude = query.min_magnitude,
            window_hours = query.window_hours,
            "Fetched hazard events"
        );

        Ok(events)
    }
}
