//! Node and edge types for the facility graph.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use crate::geo::GeoPoint;

/// Stable facility identifier.
///
/// Ordered so that every iteration over nodes, neighbors and risk sets is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A facility in the supply-chain network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Unique identifier within the graph.
    pub id: NodeId,
    /// Display label.
    pub name: String,
    /// Validated location.
    #[serde(flatten)]
    pub location: GeoPoint,
}

impl Node {
    /// Latitude in decimal degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.location.latitude
    }

    /// Longitude in decimal degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.location.longitude
    }

    /// Great-circle distance to another node in kilometers (unrounded).
    #[inline]
    pub fn distance_km(&self, other: &Node) -> f64 {
        self.location.distance_km(&other.location)
    }
}

/// A directed, weighted edge. Every edge has a mirror with the same weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Great-circle distance rounded to 0.1 km.
    pub weight_km: f64,
}
