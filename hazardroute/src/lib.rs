//! HazardRoute - risk-aware routing for facility networks
//!
//! Builds a proximity graph over facilities, classifies facilities near
//! recent hazard events (earthquakes) as risky, and finds the shortest route
//! between two facilities that avoids every risky one.
//!
//! # Example
//!
//! ```
//! use hazardroute::graph::GeoGraph;
//! use hazardroute::hazard::{compute_risk_set, HazardEvent};
//! use hazardroute::routing::{RiskAwareRouter, RouteOutcome};
//! use hazardroute::geo::GeoPoint;
//! use chrono::Utc;
//!
//! let mut graph = GeoGraph::new();
//! graph.add_node("A", "Alpha", 0.0, 0.0).unwrap();
//! graph.add_node("B", "Bravo", 0.0, 5.0).unwrap();
//! graph.add_node("C", "Charlie", 0.0, 10.0).unwrap();
//! graph.connect_by_proximity(600.0);
//!
//! let quake = HazardEvent::new(GeoPoint::new(0.0, 5.0).unwrap(), 6.1, Utc::now(), "test");
//! let risk = compute_risk_set(&graph, &[quake], 200.0);
//!
//! let outcome = RiskAwareRouter::new()
//!     .route(&graph, &risk, &"A".into(), &"C".into())
//!     .unwrap();
//! assert!(!outcome.is_found());
//! ```

pub mod assessment;
pub mod config;
pub mod facility;
pub mod geo;
pub mod graph;
pub mod hazard;
pub mod logging;
pub mod routing;

/// Version of the HazardRoute library and CLI.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
