//! Risk-aware shortest-path routing.
//!
//! [`RiskAwareRouter::route`] runs one Dijkstra search over an induced view of
//! the graph with the risk set removed. An empty risk set produces a view
//! identical to the full graph, so filtered and unfiltered routing share the
//! same search, tie-breaking and termination.
//!
//! "No path" is an ordinary answer ([`RouteOutcome::NoPath`]), not an error.
//! Only a source or destination id that the graph has never heard of is an
//! error ([`RouteError::UnknownNode`]).

mod path;

use pathfinding::prelude::dijkstra;

use crate::geo::{from_decikm, to_decikm};
use crate::graph::{GeoGraph, NodeId, Subgraph};
use crate::hazard::RiskSet;

pub use path::{Path, PathStop};

/// Input errors for routing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    #[error("Unknown facility id '{0}'")]
    UnknownNode(NodeId),
}

/// Why no route was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoPathReason {
    /// The source or destination is itself in the risk set.
    EndpointExcluded,
    /// Both endpoints are usable but no chain of edges joins them.
    Unreachable,
}

/// Result of a routing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Found(Path),
    NoPath(NoPathReason),
}

impl RouteOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            RouteOutcome::Found(path) => Some(path),
            RouteOutcome::NoPath(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

/// Stateless shortest-path router that avoids risky facilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskAwareRouter;

impl RiskAwareRouter {
    pub fn new() -> Self {
        Self
    }

    /// Route from `source` to `destination` avoiding every node in `risk_set`.
    ///
    /// Ties between equal-cost paths are resolved the same way on every call
    /// for the same input: neighbors are expanded in ascending id order and
    /// costs are compared as whole tenths of a kilometer.
    pub fn route(
        &self,
        graph: &GeoGraph,
        risk_set: &RiskSet,
        source: &NodeId,
        destination: &NodeId,
    ) -> Result<RouteOutcome, RouteError> {
        for id in [source, destination] {
            if !graph.contains(id) {
                return Err(RouteError::UnknownNode(id.clone()));
            }
        }

        let view = graph.subgraph(risk_set);
        let outcome = search(&view, source, destination);

        match &outcome {
            RouteOutcome::Found(path) => tracing::info!(
                source = %source,
                destination = %destination,
                hops = path.hop_count(),
                total_km = path.total_km,
                excluded = risk_set.len(),
                "Route found"
            ),
            RouteOutcome::NoPath(reason) => tracing::info!(
                source = %source,
                destination = %destination,
                ?reason,
                excluded = risk_set.len(),
                "No route available"
            ),
        }

        Ok(outcome)
    }
}

/// Dijkstra over a graph view.
fn search(view: &Subgraph<'_>, source: &NodeId, destination: &NodeId) -> RouteOutcome {
    if !view.contains(source) || !view.contains(destination) {
        return RouteOutcome::NoPath(NoPathReason::EndpointExcluded);
    }

    let result = dijkstra(
        source,
        |id| {
            view.neighbors(id)
                .map(|(to, weight_km)| (to.clone(), to_decikm(weight_km)))
                .collect::<Vec<_>>()
        },
        |id| id == destination,
    );

    match result {
        Some((nodes, cost)) => RouteOutcome::Found(Path::new(nodes, from_decikm(cost))),
        None => RouteOutcome::NoPath(NoPathReason::Unreachable),
    }
}
