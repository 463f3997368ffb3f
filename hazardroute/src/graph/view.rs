//! Induced subgraph view.

use std::collections::BTreeSet;

use super::{Edge, GeoGraph, Node, NodeId};

/// Read-only view of a [`GeoGraph`] with some nodes removed.
///
/// Only nodes outside the exclusion set are visible, and only edges whose
/// endpoints are both visible. The parent graph is borrowed, never copied or
/// modified. An empty exclusion set yields a view identical to the parent.
#[derive(Debug, Clone)]
pub struct Subgraph<'g> {
    parent: &'g GeoGraph,
    excluded: BTreeSet<NodeId>,
}

impl<'g> Subgraph<'g> {
    pub(super) fn new<'a, I>(parent: &'g GeoGraph, excluded: I) -> Self
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        // Ids unknown to the parent have nothing to hide
        let excluded = excluded
            .into_iter()
            .filter(|id| parent.contains(id))
            .cloned()
            .collect();
        Self { parent, excluded }
    }

    /// The graph this view was taken from.
    pub fn parent(&self) -> &'g GeoGraph {
        self.parent
    }

    /// Nodes hidden by this view.
    pub fn excluded(&self) -> &BTreeSet<NodeId> {
        &self.excluded
    }

    /// Returns true if the node exists in the parent and is not excluded.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.parent.contains(id) && !self.excluded.contains(id)
    }

    pub fn node(&self, id: &NodeId) -> Option<&'g Node> {
        if self.excluded.contains(id) {
            return None;
        }
        self.parent.node(id)
    }

    /// Visible nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &'g Node> + '_ {
        self.parent
            .nodes()
            .filter(move |node| !self.excluded.contains(&node.id))
    }

    /// Visible neighbors of a visible node, ascending by id.
    ///
    /// Yields nothing when `id` itself is excluded.
    pub fn neighbors<'s>(&'s self, id: &NodeId) -> impl Iterator<Item = (&'g NodeId, f64)> + 's {
        let visible = !self.excluded.contains(id);
        self.parent
            .neighbors(id)
            .filter(move |(to, _)| visible && !self.excluded.contains(*to))
    }

    /// Visible directed edges, ordered by `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.parent
            .edges()
            .filter(move |e| !self.excluded.contains(&e.from) && !self.excluded.contains(&e.to))
    }

    pub fn node_count(&self) -> usize {
        self.parent.node_count() - self.excluded.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
