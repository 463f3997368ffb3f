//! Graph construction from facility records.

use super::{GeoGraph, GraphError};
use crate::facility::FacilityRecord;

/// A facility record that could not be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub record: FacilityRecord,
    pub error: GraphError,
}

/// Result of building a graph: the graph plus any records that were refused.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub graph: GeoGraph,
    pub rejected: Vec<RejectedRecord>,
}

/// Builds a [`GeoGraph`] from facility records and connects it.
///
/// Records are inserted one at a time. A record with a duplicate id or bad
/// coordinates is rejected on its own; the rest of the input still builds.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    threshold_km: f64,
}

impl GraphBuilder {
    /// Create a builder that links facilities within `threshold_km`.
    pub fn new(threshold_km: f64) -> Self {
        Self { threshold_km }
    }

    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    /// Insert every record, then connect by proximity.
    pub fn build<I>(&self, records: I) -> BuildOutcome
    where
        I: IntoIterator<Item = FacilityRecord>,
    {
        let BuildOutcome { mut graph, rejected } = Self::insert_records(records);
        let links = graph.connect_by_proximity(self.threshold_km);

        tracing::info!(
            nodes = graph.node_count(),
            links,
            rejected = rejected.len(),
            threshold_km = self.threshold_km,
            "Built facility graph"
        );

        BuildOutcome { graph, rejected }
    }

    /// Insert every record without linking them.
    ///
    /// For callers that only need node positions, such as risk
    /// classification, and should not pay for the pairwise scan.
    pub fn insert_records<I>(records: I) -> BuildOutcome
    where
        I: IntoIterator<Item = FacilityRecord>,
    {
        let mut graph = GeoGraph::new();
        let mut rejected = Vec::new();

        for record in records {
            match graph.add_node(
                record.id.as_str(),
                record.name.as_str(),
                record.lat,
                record.lon,
            ) {
                Ok(()) => {}
                Err(error) => {
                    tracing::warn!(id = %record.id, name = %record.name, "Rejected facility record: {}", error);
                    rejected.push(RejectedRecord { record, error });
                }
            }
        }

        BuildOutcome { graph, rejected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::CoordError;

    fn record(id: &str, lat: f64, lon: f64) -> FacilityRecord {
        FacilityRecord {
            id: id.to_string(),
            name: format!("Facility {}", id),
            lat,
            lon,
        }
    }

    #[test]
    fn test_build_connects_valid_records() {
        let outcome = GraphBuilder::new(600.0).build(vec![
            record("A", 0.0, 0.0),
            record("B", 0.0, 5.0),
            record("C", 0.0, 10.0),
        ]);

        assert!(outcome.rejected.is_empty());
        assert_eq!(outcome.graph.node_count(), 3);
        assert_eq!(outcome.graph.edge_count(), 4);
    }

    #[test]
    fn test_build_rejects_single_bad_record_and_continues() {
        let outcome = GraphBuilder::new(600.0).build(vec![
            record("A", 0.0, 0.0),
            record("A", 1.0, 1.0),
            record("X", -95.0, 0.0),
            record("B", 0.0, 5.0),
        ]);

        assert_eq!(outcome.graph.node_count(), 2);
        assert_eq!(outcome.rejected.len(), 2);

        assert_eq!(outcome.rejected[0].record.lat, 1.0);
        assert_eq!(
            outcome.rejected[0].error,
            GraphError::DuplicateNode("A".into())
        );
        assert_eq!(outcome.rejected[1].record.id, "X");
        assert!(matches!(
            outcome.rejected[1].error,
            GraphError::InvalidCoordinate {
                source: CoordError::InvalidLatitude(_),
                ..
            }
        ));
        // The first "A" survived with its original coordinates
        let a = outcome.graph.node(&"A".into()).unwrap();
        assert_eq!(a.latitude(), 0.0);
    }

    #[test]
    fn test_build_empty_input() {
        let outcome = GraphBuilder::new(600.0).build(Vec::new());
        assert!(outcome.graph.is_empty());
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn test_insert_records_leaves_graph_unlinked() {
        let outcome = GraphBuilder::insert_records(vec![
            record("A", 0.0, 0.0),
            record("B", 0.0, 5.0),
            record("A", 1.0, 1.0),
        ]);

        assert_eq!(outcome.graph.node_count(), 2);
        assert_eq!(outcome.graph.edge_count(), 0);
        assert_eq!(outcome.rejected.len(), 1);
        assert!(outcome.graph.node(&"B".into()).is_some());
    }
}
