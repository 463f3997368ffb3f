//! Hazard events and risk classification.
//!
//! Hazard events are fetched once per assessment cycle through a
//! [`feed::HazardFeed`] and classified against the facility graph by
//! [`overlay::compute_risk_set`]. Nothing here is cached between cycles: each
//! snapshot produces a fresh [`RiskSet`].

pub mod feed;
pub mod overlay;

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::geo::GeoPoint;
use crate::graph::NodeId;

pub use overlay::{compute_risk_set, HazardOverlay, NodeExposure};

/// A single observed hazard (typically an earthquake).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HazardEvent {
    /// Epicenter.
    pub location: GeoPoint,
    /// Severity on the source's scale (moment magnitude for USGS).
    pub magnitude: f64,
    /// Time the event was observed.
    pub observed_at: DateTime<Utc>,
    /// Free-text description, e.g. "12 km SSW of Ridgecrest, CA".
    pub description: String,
}

impl HazardEvent {
    pub fn new(
        location: GeoPoint,
        magnitude: f64,
        observed_at: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            location,
            magnitude,
            observed_at,
            description: description.into(),
        }
    }
}

/// Node ids classified as unsafe for one hazard snapshot.
///
/// Iteration is in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RiskSet(BTreeSet<NodeId>);

impl RiskSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.0.contains(id)
    }

    pub fn insert(&mut self, id: NodeId) -> bool {
        self.0.insert(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.0.iter()
    }

    /// Returns true if every id in `self` is also in `other`.
    pub fn is_subset(&self, other: &RiskSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn as_set(&self) -> &BTreeSet<NodeId> {
        &self.0
    }
}

impl FromIterator<NodeId> for RiskSet {
    fn from_iter<T: IntoIterator<Item = NodeId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RiskSet {
    type Item = &'a NodeId;
    type IntoIter = std::collections::btree_set::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
