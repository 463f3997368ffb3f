//! Facility proximity graph.
//!
//! A [`GeoGraph`] holds facility nodes and symmetric weighted edges derived
//! from great-circle proximity. The graph is a plain value once built: routing
//! and risk classification only ever read it, and exclusion is expressed as a
//! borrowed [`Subgraph`] view rather than a mutation.
//!
//! # Example
//!
//! ```
//! use hazardroute::graph::GeoGraph;
//!
//! let mut graph = GeoGraph::new();
//! graph.add_node("A", "Port", 0.0, 0.0)?;
//! graph.add_node("B", "Warehouse", 0.0, 5.0)?;
//! graph.connect_by_proximity(600.0);
//!
//! assert_eq!(graph.edge_weight(&"A".into(), &"B".into()), Some(556.0));
//! # Ok::<(), hazardroute::graph::GraphError>(())
//! ```

mod builder;
mod node;
mod proximity;
mod view;

use std::collections::BTreeMap;

use crate::geo::{CoordError, GeoPoint};

pub use builder::{BuildOutcome, GraphBuilder, RejectedRecord};
pub use node::{Edge, Node, NodeId};
pub use proximity::PARALLEL_PAIR_CUTOFF;
pub use view::Subgraph;

/// Validation errors raised while inserting nodes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("Duplicate node id '{0}'")]
    DuplicateNode(NodeId),
    #[error("Invalid coordinates for node '{id}': {source}")]
    InvalidCoordinate {
        id: NodeId,
        #[source]
        source: CoordError,
    },
}

/// Facility graph with proximity-derived edges.
#[derive(Debug, Clone, Default)]
pub struct GeoGraph {
    nodes: BTreeMap<NodeId, Node>,
    // Both directions are stored; inner maps keep neighbors sorted by id.
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
}

impl GeoGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a facility node.
    ///
    /// Fails without modifying the graph when the id already exists or the
    /// coordinates are out of range.
    pub fn add_node(
        &mut self,
        id: impl Into<NodeId>,
        name: impl Into<String>,
        lat: f64,
        lon: f64,
    ) -> Result<(), GraphError> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        let location = GeoPoint::new(lat, lon).map_err(|source| GraphError::InvalidCoordinate {
            id: id.clone(),
            source,
        })?;

        self.adjacency.insert(id.clone(), BTreeMap::new());
        self.nodes.insert(
            id.clone(),
            Node {
                id,
                name: name.into(),
                location,
            },
        );
        Ok(())
    }

    /// Rebuild the edge set from pairwise great-circle distances.
    ///
    /// Every unordered pair of distinct nodes whose distance is at most
    /// `threshold_km` gets an edge in both directions weighted by the distance
    /// rounded to 0.1 km. Existing edges are discarded first.
    ///
    /// Returns the number of undirected links created.
    pub fn connect_by_proximity(&mut self, threshold_km: f64) -> usize {
        let nodes: Vec<&Node> = self.nodes.values().collect();
        let links = proximity::proximity_links(&nodes, threshold_km);

        let mut adjacency: BTreeMap<NodeId, BTreeMap<NodeId, f64>> = self
            .nodes
            .keys()
            .map(|id| (id.clone(), BTreeMap::new()))
            .collect();

        for link in &links {
            let a = &nodes[link.a].id;
            let b = &nodes[link.b].id;
            if let Some(out) = adjacency.get_mut(a) {
                out.insert(b.clone(), link.weight_km);
            }
            if let Some(out) = adjacency.get_mut(b) {
                out.insert(a.clone(), link.weight_km);
            }
        }

        tracing::debug!(
            nodes = nodes.len(),
            links = links.len(),
            threshold_km,
            "Connected facilities by proximity"
        );

        self.adjacency = adjacency;
        links.len()
    }

    /// Read-only view without the excluded nodes and their incident edges.
    pub fn subgraph<'g, 'a, I>(&'g self, excluded: I) -> Subgraph<'g>
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        Subgraph::new(self, excluded)
    }

    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Returns true if the graph contains the node.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate a node's neighbors with edge weights, ascending by id.
    ///
    /// Yields nothing for unknown ids.
    pub fn neighbors<'g>(&'g self, id: &NodeId) -> impl Iterator<Item = (&'g NodeId, f64)> {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|out| out.iter().map(|(to, weight)| (to, *weight)))
    }

    /// Weight of the edge `from → to`, if present.
    pub fn edge_weight(&self, from: &NodeId, to: &NodeId) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// All directed edges, ordered by `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(from, out)| {
            out.iter().map(move |(to, weight)| Edge {
                from: from.clone(),
                to: to.clone(),
                weight_km: *weight,
            })
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges (twice the number of links).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
