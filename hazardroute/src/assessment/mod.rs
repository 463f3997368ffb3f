//! One risk-assessment cycle: fetch hazards, classify, route, report.
//!
//! ```text
//! HazardFeed::fetch ──► compute_risk_set ──► RiskAwareRouter::route ──► AssessmentReport
//! ```
//!
//! Every cycle starts from a fresh fetch; nothing from a previous cycle is
//! reused. A feed failure ends the cycle with [`AssessmentError::Feed`]
//! before any classification happens.

mod report;

use std::path::PathBuf;

use chrono::Utc;

use crate::graph::{GeoGraph, NodeId};
use crate::hazard::feed::{FeedError, FeedQuery, HazardFeed};
use crate::hazard::HazardOverlay;
use crate::routing::{RiskAwareRouter, RouteError};

pub use report::{
    AssessmentReport, NodeStatus, ReportParameters, RiskStatus, RouteReport, RouteStatus,
};

/// Default distance for linking facilities, in kilometers.
pub const DEFAULT_PROXIMITY_THRESHOLD_KM: f64 = 600.0;

/// Default danger radius around each hazard, in kilometers.
pub const DEFAULT_HAZARD_RADIUS_KM: f64 = 200.0;

/// Errors that end an assessment cycle.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("Hazard feed '{feed}' failed: {source}")]
    Feed {
        feed: String,
        #[source]
        source: FeedError,
    },

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("Failed to serialize report: {0}")]
    Serialize(String),

    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Inputs for one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentParams {
    pub source: NodeId,
    pub destination: NodeId,
    pub hazard_radius_km: f64,
    pub query: FeedQuery,
}

impl AssessmentParams {
    pub fn new(source: impl Into<NodeId>, destination: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            hazard_radius_km: DEFAULT_HAZARD_RADIUS_KM,
            query: FeedQuery::default(),
        }
    }

    pub fn with_hazard_radius_km(mut self, radius_km: f64) -> Self {
        self.hazard_radius_km = radius_km;
        self
    }

    pub fn with_query(mut self, query: FeedQuery) -> Self {
        self.query = query;
        self
    }
}

/// Runs assessment cycles against one graph.
pub struct RiskAssessment<'g> {
    graph: &'g GeoGraph,
    proximity_threshold_km: f64,
    router: RiskAwareRouter,
}

impl<'g> RiskAssessment<'g> {
    /// `proximity_threshold_km` is the threshold the graph was connected with;
    /// it is only recorded in the report.
    pub fn new(graph: &'g GeoGraph, proximity_threshold_km: f64) -> Self {
        Self {
            graph,
            proximity_threshold_km,
            router: RiskAwareRouter::new(),
        }
    }

    /// Run one full cycle.
    pub fn run(
        &self,
        feed: &dyn HazardFeed,
        params: &AssessmentParams,
    ) -> Result<AssessmentReport, AssessmentError> {
        // Reject bad endpoints before spending a network round trip
        for id in [&params.source, &params.destination] {
            if !self.graph.contains(id) {
                return Err(RouteError::UnknownNode(id.clone()).into());
            }
        }

        let hazards = feed
            .fetch(&params.query)
            .map_err(|source| AssessmentError::Feed {
                feed: feed.name().to_string(),
                source,
            })?;

        let overlay = HazardOverlay::new(params.hazard_radius_km);
        let risk_set = overlay.risk_set(self.graph, &hazards);
        let exposures = overlay.exposures(self.graph, &hazards);

        let outcome =
            self.router
                .route(self.graph, &risk_set, &params.source, &params.destination)?;

        tracing::info!(
            feed = feed.name(),
            hazards = hazards.len(),
            risky = risk_set.len(),
            routed = outcome.is_found(),
            "Assessment cycle complete"
        );

        let parameters = ReportParameters {
            feed: feed.name().to_string(),
            proximity_threshold_km: self.proximity_threshold_km,
            hazard_radius_km: params.hazard_radius_km,
            min_magnitude: params.query.min_magnitude,
            window_hours: feed
                .applies_time_window()
                .then_some(params.query.window_hours),
            source: params.source.clone(),
            destination: params.destination.clone(),
        };

        Ok(AssessmentReport::new(
            Utc::now(),
            parameters,
            self.graph,
            hazards,
            risk_set,
            &exposures,
            &outcome,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::hazard::feed::StaticFeed;
    use crate::hazard::HazardEvent;
    use chrono::DateTime;

    struct FailingFeed;

    impl HazardFeed for FailingFeed {
        fn name(&self) -> &str {
            "failing"
        }

        fn fetch(&self, _query: &FeedQuery) -> Result<Vec<HazardEvent>, FeedError> {
            Err(FeedError::Http("connection refused".to_string()))
        }
    }

    /// Feed that honours the look-back window, like the live service.
    struct WindowedFeed(StaticFeed);

    impl HazardFeed for WindowedFeed {
        fn name(&self) -> &str {
            "windowed"
        }

        fn fetch(&self, query: &FeedQuery) -> Result<Vec<HazardEvent>, FeedError> {
            self.0.fetch(query)
        }
    }

    fn graph() -> GeoGraph {
        let mut graph = GeoGraph::new();
        graph.add_node("A", "A", 0.0, 0.0).unwrap();
        graph.add_node("B", "B", 0.0, 5.0).unwrap();
        graph.add_node("C", "C", 0.0, 10.0).unwrap();
        graph.connect_by_proximity(600.0);
        graph
    }

    fn quake_at_b() -> HazardEvent {
        HazardEvent::new(
            GeoPoint::new(0.0, 5.0).unwrap(),
            6.0,
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            "near B",
        )
    }

    #[test]
    fn test_cycle_without_hazards_routes_directly() {
        let graph = graph();
        let report = RiskAssessment::new(&graph, 600.0)
            .run(&StaticFeed::default(), &AssessmentParams::new("A", "C"))
            .unwrap();

        assert!(report.risk_set.is_empty());
        assert_eq!(report.route.status, RouteStatus::Found);
        assert_eq!(report.route.stops.len(), 3);
    }

    #[test]
    fn test_cycle_with_hazard_reports_no_path() {
        let graph = graph();
        let feed = StaticFeed::new(vec![quake_at_b()]);
        let report = RiskAssessment::new(&graph, 600.0)
            .run(&feed, &AssessmentParams::new("A", "C"))
            .unwrap();

        assert!(report.risk_set.contains(&"B".into()));
        assert_eq!(report.route.status, RouteStatus::NoPath);
        assert!(report.route.stops.is_empty());
        assert_eq!(report.hazards.len(), 1);
    }

    #[test]
    fn test_feed_failure_aborts_cycle() {
        let graph = graph();
        let result =
            RiskAssessment::new(&graph, 600.0).run(&FailingFeed, &AssessmentParams::new("A", "C"));

        match result {
            Err(AssessmentError::Feed { feed, source }) => {
                assert_eq!(feed, "failing");
                assert!(matches!(source, FeedError::Http(_)));
            }
            other => panic!("expected feed error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_unknown_endpoint_checked_before_fetch() {
        let graph = graph();
        // FailingFeed would error if it were reached
        let result =
            RiskAssessment::new(&graph, 600.0).run(&FailingFeed, &AssessmentParams::new("A", "X"));

        assert!(matches!(
            result,
            Err(AssessmentError::Route(RouteError::UnknownNode(_)))
        ));
    }

    #[test]
    fn test_magnitude_filter_applies() {
        let graph = graph();
        let feed = StaticFeed::new(vec![quake_at_b()]);
        let params = AssessmentParams::new("A", "C").with_query(FeedQuery::new(7.0, 24));
        let report = RiskAssessment::new(&graph, 600.0).run(&feed, &params).unwrap();

        assert!(report.hazards.is_empty());
        assert_eq!(report.route.status, RouteStatus::Found);
    }

    #[test]
    fn test_window_recorded_only_when_feed_applies_it() {
        let graph = graph();
        let params = AssessmentParams::new("A", "C").with_query(FeedQuery::new(4.5, 6));
        let assessment = RiskAssessment::new(&graph, 600.0);

        let snapshot = assessment
            .run(&StaticFeed::new(vec![quake_at_b()]), &params)
            .unwrap();
        assert_eq!(snapshot.parameters.window_hours, None);

        let live = assessment
            .run(&WindowedFeed(StaticFeed::new(vec![quake_at_b()])), &params)
            .unwrap();
        assert_eq!(live.parameters.window_hours, Some(6));
    }
}
