//! Output bundle handed to renderers and report writers.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::AssessmentError;
use crate::geo::round_tenth;
use crate::graph::{GeoGraph, NodeId};
use crate::hazard::{HazardEvent, NodeExposure, RiskSet};
use crate::routing::{NoPathReason, Path as RoutePath, PathStop, RouteOutcome};

/// Safety classification of one facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    Safe,
    Risky,
}

/// A facility with its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeStatus {
    pub id: NodeId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: RiskStatus,
    /// Distance to the closest hazard, rounded to 0.1 km.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_hazard_km: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Found,
    NoPath,
}

/// Route section of the report. `stops` is empty when no path was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub status: RouteStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<NoPathReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_km: Option<f64>,
    pub stops: Vec<PathStop>,
    #[serde(skip)]
    pub path: Option<RoutePath>,
}

/// Parameters the cycle ran with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportParameters {
    pub feed: String,
    pub proximity_threshold_km: f64,
    pub hazard_radius_km: f64,
    pub min_magnitude: f64,
    /// Look-back window, absent when the feed is a snapshot that ignores it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_hours: Option<u32>,
    pub source: NodeId,
    pub destination: NodeId,
}

/// Everything an output collaborator needs to render one cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub parameters: ReportParameters,
    pub nodes: Vec<NodeStatus>,
    pub hazards: Vec<HazardEvent>,
    pub risk_set: RiskSet,
    pub route: RouteReport,
}

impl AssessmentReport {
    pub(super) fn new(
        generated_at: DateTime<Utc>,
        parameters: ReportParameters,
        graph: &GeoGraph,
        hazards: Vec<HazardEvent>,
        risk_set: RiskSet,
        exposures: &[NodeExposure],
        outcome: &RouteOutcome,
    ) -> Self {
        let nearest: BTreeMap<&NodeId, f64> = exposures
            .iter()
            .map(|exposure| (&exposure.node, exposure.distance_km))
            .collect();

        let nodes = graph
            .nodes()
            .map(|node| NodeStatus {
                id: node.id.clone(),
                name: node.name.clone(),
                latitude: node.latitude(),
                longitude: node.longitude(),
                status: if risk_set.contains(&node.id) {
                    RiskStatus::Risky
                } else {
                    RiskStatus::Safe
                },
                nearest_hazard_km: nearest.get(&node.id).map(|km| round_tenth(*km)),
            })
            .collect();

        let route = match outcome {
            RouteOutcome::Found(path) => RouteReport {
                status: RouteStatus::Found,
                reason: None,
                total_km: Some(path.total_km),
                stops: path.stops(graph),
                path: Some(path.clone()),
            },
            RouteOutcome::NoPath(reason) => RouteReport {
                status: RouteStatus::NoPath,
                reason: Some(*reason),
                total_km: None,
                stops: Vec::new(),
                path: None,
            },
        };

        Self {
            generated_at,
            parameters,
            nodes,
            hazards,
            risk_set,
            route,
        }
    }

    /// Facilities classified as risky, ascending by id.
    pub fn risky_nodes(&self) -> impl Iterator<Item = &NodeStatus> {
        self.nodes
            .iter()
            .filter(|node| node.status == RiskStatus::Risky)
    }

    pub fn path(&self) -> Option<&RoutePath> {
        self.route.path.as_ref()
    }

    pub fn to_json_pretty(&self) -> Result<String, AssessmentError> {
        serde_json::to_string_pretty(self).map_err(|e| AssessmentError::Serialize(e.to_string()))
    }

    /// Write the report as pretty JSON, creating parent directories.
    pub fn write_json(&self, path: &Path) -> Result<(), AssessmentError> {
        let json = self.to_json_pretty()?;
        let write_err = |source| AssessmentError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, json).map_err(write_err)?;

        tracing::info!(path = %path.display(), "Wrote assessment report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::hazard::HazardOverlay;
    use crate::routing::RiskAwareRouter;

    fn build(hazard_lon: Option<f64>) -> AssessmentReport {
        let mut graph = GeoGraph::new();
        graph.add_node("A", "Port", 0.0, 0.0).unwrap();
        graph.add_node("B", "Yard", 0.0, 5.0).unwrap();
        graph.add_node("C", "Store", 0.0, 10.0).unwrap();
        graph.connect_by_proximity(600.0);

        let hazards: Vec<HazardEvent> = hazard_lon
            .into_iter()
            .map(|lon| {
                HazardEvent::new(
                    GeoPoint::new(0.0, lon).unwrap(),
                    5.5,
                    DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
                    "quake",
                )
            })
            .collect();

        let overlay = HazardOverlay::new(200.0);
        let risk_set = overlay.risk_set(&graph, &hazards);
        let exposures = overlay.exposures(&graph, &hazards);
        let outcome = RiskAwareRouter::new()
            .route(&graph, &risk_set, &"A".into(), &"C".into())
            .unwrap();

        let parameters = ReportParameters {
            feed: "static".to_string(),
            proximity_threshold_km: 600.0,
            hazard_radius_km: 200.0,
            min_magnitude: 4.5,
            window_hours: None,
            source: "A".into(),
            destination: "C".into(),
        };

        AssessmentReport::new(
            DateTime::from_timestamp(1_700_000_100, 0).unwrap(),
            parameters,
            &graph,
            hazards,
            risk_set,
            &exposures,
            &outcome,
        )
    }

    #[test]
    fn test_found_route_json_shape() {
        let report = build(None);
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["route"]["status"], "found");
        assert_eq!(json["route"]["total_km"], 1112.0);
        assert_eq!(json["route"]["stops"][1]["id"], "B");
        assert!(json["route"].get("reason").is_none());
        assert_eq!(json["nodes"][0]["status"], "safe");
        assert!(json["nodes"][0].get("nearest_hazard_km").is_none());
        assert_eq!(json["risk_set"], serde_json::json!([]));
        assert!(json["parameters"].get("window_hours").is_none());
    }

    #[test]
    fn test_no_path_json_shape() {
        let report = build(Some(5.0));
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["route"]["status"], "no_path");
        assert_eq!(json["route"]["reason"], "unreachable");
        assert_eq!(json["route"]["stops"], serde_json::json!([]));
        assert_eq!(json["nodes"][1]["status"], "risky");
        assert_eq!(json["nodes"][1]["nearest_hazard_km"], 0.0);
        assert_eq!(json["hazards"][0]["magnitude"], 5.5);

        let risky: Vec<&str> = report.risky_nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(risky, vec!["B"]);
        assert!(report.path().is_none());
    }

    #[test]
    fn test_write_json_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("reports").join("cycle.json");

        build(None).write_json(&target).unwrap();

        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.contains("\"generated_at\""));
    }
}
