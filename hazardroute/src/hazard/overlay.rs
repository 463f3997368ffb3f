//! Hazard overlay: which facilities sit inside a danger radius.

use rayon::prelude::*;

use super::{HazardEvent, RiskSet};
use crate::graph::{GeoGraph, Node, NodeId};

/// Node-hazard pair count above which the scan runs on the rayon pool.
const PARALLEL_CHECK_CUTOFF: usize = 4096;

/// Classify every node against a hazard snapshot.
///
/// A node is risky when at least one hazard lies within `radius_km`
/// (inclusive) of it. The result depends only on the inputs, never on
/// evaluation order, and an empty hazard list yields an empty set.
pub fn compute_risk_set(graph: &GeoGraph, hazards: &[HazardEvent], radius_km: f64) -> RiskSet {
    HazardOverlay::new(radius_km).risk_set(graph, hazards)
}

/// Closest hazard to a node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeExposure {
    pub node: NodeId,
    /// Index into the hazard slice that was classified.
    pub hazard_index: usize,
    pub distance_km: f64,
    /// True when `distance_km` is within the overlay radius.
    pub at_risk: bool,
}

/// Risk classifier for a fixed danger radius.
#[derive(Debug, Clone, Copy)]
pub struct HazardOverlay {
    radius_km: f64,
}

impl HazardOverlay {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Compute the risk set for `graph` under `hazards`.
    pub fn risk_set(&self, graph: &GeoGraph, hazards: &[HazardEvent]) -> RiskSet {
        if hazards.is_empty() {
            return RiskSet::new();
        }

        let nodes: Vec<&Node> = graph.nodes().collect();
        let risky: RiskSet = if nodes.len() * hazards.len() > PARALLEL_CHECK_CUTOFF {
            nodes
                .par_iter()
                .filter(|node| self.is_at_risk(node, hazards))
                .map(|node| node.id.clone())
                .collect::<Vec<_>>()
                .into_iter()
                .collect()
        } else {
            nodes
                .iter()
                .filter(|node| self.is_at_risk(node, hazards))
                .map(|node| node.id.clone())
                .collect()
        };

        tracing::debug!(
            nodes = nodes.len(),
            hazards = hazards.len(),
            radius_km = self.radius_km,
            risky = risky.len(),
            "Computed risk set"
        );

        risky
    }

    /// Returns true if any hazard is within the radius of `node`.
    pub fn is_at_risk(&self, node: &Node, hazards: &[HazardEvent]) -> bool {
        hazards
            .iter()
            .any(|hazard| node.location.distance_km(&hazard.location) <= self.radius_km)
    }

    /// Nearest hazard for every node, ascending by node id.
    ///
    /// Empty when there are no hazards.
    pub fn exposures(&self, graph: &GeoGraph, hazards: &[HazardEvent]) -> Vec<NodeExposure> {
        graph
            .nodes()
            .filter_map(|node| {
                hazards
                    .iter()
                    .enumerate()
                    .map(|(index, hazard)| (index, node.location.distance_km(&hazard.location)))
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(hazard_index, distance_km)| NodeExposure {
                        node: node.id.clone(),
                        hazard_index,
                        distance_km,
                        at_risk: distance_km <= self.radius_km,
                    })
            })
            .collect()
    }
}
