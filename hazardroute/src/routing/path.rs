//! Route paths.

use serde::Serialize;

use crate::graph::{GeoGraph, NodeId};

/// Ordered facilities from source to destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    pub nodes: Vec<NodeId>,
    /// Sum of the traversed edge weights.
    pub total_km: f64,
}

/// One facility along a path, with coordinates for the output collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStop {
    pub id: NodeId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Weight of the edge arriving at this stop (0 for the source).
    pub leg_km: f64,
    pub cumulative_km: f64,
}

impl Path {
    pub fn new(nodes: Vec<NodeId>, total_km: f64) -> Self {
        Self { nodes, total_km }
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&NodeId> {
        self.nodes.first()
    }

    pub fn destination(&self) -> Option<&NodeId> {
        self.nodes.last()
    }

    /// Resolve each hop against `graph`.
    ///
    /// Nodes missing from `graph` are skipped, which only happens if the path
    /// is paired with a different graph than the one it was computed on.
    pub fn stops(&self, graph: &GeoGraph) -> Vec<PathStop> {
        let mut cumulative_km = 0.0;
        let mut previous: Option<&NodeId> = None;

        self.nodes
            .iter()
            .filter_map(|id| {
                let node = graph.node(id)?;
                let leg_km = previous
                    .and_then(|prev| graph.edge_weight(prev, id))
                    .unwrap_or(0.0);
                cumulative_km += leg_km;
                previous = Some(id);
                Some(PathStop {
                    id: id.clone(),
                    name: node.name.clone(),
                    latitude: node.latitude(),
                    longitude: node.longitude(),
                    leg_km,
                    cumulative_km: crate::geo::round_tenth(cumulative_km),
                })
            })
            .collect()
    }

    /// Ids joined with arrows, e.g. `A → B → C`.
    pub fn display_chain(&self) -> String {
        self.nodes
            .iter()
            .map(NodeId::as_str)
            .collect::<Vec<_>>()
            .join(" → ")
    }
}
