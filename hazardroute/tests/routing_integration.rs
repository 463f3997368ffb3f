//! Integration tests for the graph → overlay → router pipeline.
//!
//! Covers the three reference scenarios end to end plus the structural
//! properties every graph, risk set and route must satisfy.
//!
//! Scenario layout (R = 6371 km):
//!
//! ```text
//!            D (2,5)
//!          /   |    \
//!  A (0,0) -- B (0,5) -- C (0,10)
//! ```
//!
//! A-B and B-C are 556.0 km, A-D and D-C 598.7 km, B-D 222.4 km, and A-C
//! (1111.9 km) is beyond the 600 km threshold.

use chrono::DateTime;
use hazardroute::assessment::{AssessmentParams, RiskAssessment, RouteStatus};
use hazardroute::geo::GeoPoint;
use hazardroute::graph::{GeoGraph, NodeId};
use hazardroute::hazard::feed::{FeedQuery, StaticFeed};
use hazardroute::hazard::{compute_risk_set, HazardEvent, RiskSet};
use hazardroute::routing::{NoPathReason, RiskAwareRouter, RouteOutcome};

// =============================================================================
// Test Helpers
// =============================================================================

fn scenario_graph(with_detour: bool) -> GeoGraph {
    let mut graph = GeoGraph::new();
    graph.add_node("A", "Alpha Port", 0.0, 0.0).unwrap();
    graph.add_node("B", "Bravo Rail", 0.0, 5.0).unwrap();
    graph.add_node("C", "Charlie Store", 0.0, 10.0).unwrap();
    if with_detour {
        graph.add_node("D", "Delta Depot", 2.0, 5.0).unwrap();
    }
    graph.connect_by_proximity(600.0);
    graph
}

fn quake(lat: f64, lon: f64) -> HazardEvent {
    HazardEvent::new(
        GeoPoint::new(lat, lon).unwrap(),
        6.0,
        DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        "test quake",
    )
}

fn ids(names: &[&str]) -> Vec<NodeId> {
    names.iter().map(|n| NodeId::from(*n)).collect()
}

/// Deterministic scatter of facilities over a regional box.
fn scattered_graph(count: usize, threshold_km: f64) -> GeoGraph {
    let mut graph = GeoGraph::new();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 10_000) as f64 / 10_000.0
    };

    for i in 0..count {
        let lat = 30.0 + next() * 15.0;
        let lon = -120.0 + next() * 25.0;
        graph
            .add_node(format!("F{:04}", i), format!("Facility {}", i), lat, lon)
            .unwrap();
    }
    graph.connect_by_proximity(threshold_km);
    graph
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_basic_route_without_hazards() {
    let graph = scenario_graph(false);
    assert_eq!(graph.edge_weight(&"A".into(), &"B".into()), Some(556.0));
    assert_eq!(graph.edge_weight(&"B".into(), &"C".into()), Some(556.0));
    assert_eq!(graph.edge_weight(&"A".into(), &"C".into()), None);

    let risk = compute_risk_set(&graph, &[], 200.0);
    assert!(risk.is_empty());

    let outcome = RiskAwareRouter::new()
        .route(&graph, &risk, &"A".into(), &"C".into())
        .unwrap();
    let path = outcome.path().unwrap();
    assert_eq!(path.nodes, ids(&["A", "B", "C"]));
    assert_eq!(path.total_km, 1112.0);
}

#[test]
fn test_scenario_hazard_blocks_only_bridge() {
    let graph = scenario_graph(false);
    let risk = compute_risk_set(&graph, &[quake(0.0, 5.0)], 200.0);
    assert_eq!(risk.iter().cloned().collect::<Vec<_>>(), ids(&["B"]));

    let outcome = RiskAwareRouter::new()
        .route(&graph, &risk, &"A".into(), &"C".into())
        .unwrap();
    assert_eq!(outcome, RouteOutcome::NoPath(NoPathReason::Unreachable));
}

#[test]
fn test_scenario_detour_around_hazard() {
    let graph = scenario_graph(true);
    let risk = compute_risk_set(&graph, &[quake(0.0, 5.0)], 200.0);
    assert_eq!(risk.iter().cloned().collect::<Vec<_>>(), ids(&["B"]));

    let outcome = RiskAwareRouter::new()
        .route(&graph, &risk, &"A".into(), &"C".into())
        .unwrap();
    let path = outcome.path().unwrap();
    assert_eq!(path.nodes, ids(&["A", "D", "C"]));
    assert_eq!(path.total_km, 1197.4);

    // Without the hazard the shorter chain through B wins
    let outcome = RiskAwareRouter::new()
        .route(&graph, &RiskSet::new(), &"A".into(), &"C".into())
        .unwrap();
    assert_eq!(outcome.path().unwrap().nodes, ids(&["A", "B", "C"]));
}

#[test]
fn test_scenario_full_assessment_cycle() {
    let graph = scenario_graph(true);
    let feed = StaticFeed::new(vec![quake(0.0, 5.0)]);
    let params = AssessmentParams::new("A", "C").with_query(FeedQuery::new(4.5, 24));

    let report = RiskAssessment::new(&graph, 600.0).run(&feed, &params).unwrap();

    assert_eq!(report.route.status, RouteStatus::Found);
    assert_eq!(report.route.total_km, Some(1197.4));
    let stops: Vec<&str> = report.route.stops.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(stops, vec!["A", "D", "C"]);
    let risky: Vec<&str> = report.risky_nodes().map(|n| n.id.as_str()).collect();
    assert_eq!(risky, vec!["B"]);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_edges_are_symmetric_without_self_loops() {
    let graph = scattered_graph(120, 400.0);
    assert!(graph.edge_count() > 0);

    for edge in graph.edges() {
        assert_ne!(edge.from, edge.to);
        assert!(edge.weight_km >= 0.0);
        assert_eq!(graph.edge_weight(&edge.to, &edge.from), Some(edge.weight_km));
    }
}

#[test]
fn test_threshold_equal_to_distance_links_pair() {
    let mut graph = GeoGraph::new();
    graph.add_node("A", "A", 40.7128, -74.006).unwrap();
    graph.add_node("B", "B", 34.0522, -118.2437).unwrap();

    let a = graph.node(&"A".into()).unwrap().clone();
    let b = graph.node(&"B".into()).unwrap().clone();
    let exact = a.distance_km(&b);

    assert_eq!(graph.connect_by_proximity(exact), 1);
    assert_eq!(graph.connect_by_proximity(exact - 0.001), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_risk_set_grows_with_radius() {
    let graph = scattered_graph(150, 300.0);
    let hazards = vec![quake(37.0, -110.0), quake(42.0, -100.0)];

    let mut previous = RiskSet::new();
    for radius in [0.0, 50.0, 150.0, 300.0, 600.0, 1200.0] {
        let risk = compute_risk_set(&graph, &hazards, radius);
        assert!(previous.is_subset(&risk), "radius {} shrank the risk set", radius);
        previous = risk;
    }
    assert!(!previous.is_empty());
}

#[test]
fn test_risk_set_is_idempotent_and_order_independent() {
    let graph = scattered_graph(300, 300.0);
    let hazards = vec![quake(35.0, -115.0), quake(40.0, -105.0), quake(44.0, -98.0)];
    let reversed: Vec<_> = hazards.iter().rev().cloned().collect();

    let first = compute_risk_set(&graph, &hazards, 250.0);
    let second = compute_risk_set(&graph, &hazards, 250.0);
    let shuffled = compute_risk_set(&graph, &reversed, 250.0);

    assert_eq!(first, second);
    assert_eq!(first, shuffled);
}

#[test]
fn test_routes_never_touch_risky_nodes() {
    let graph = scattered_graph(200, 350.0);
    let hazards = vec![quake(37.5, -108.0)];
    let risk = compute_risk_set(&graph, &hazards, 300.0);
    assert!(!risk.is_empty());

    let safe: Vec<NodeId> = graph
        .nodes()
        .map(|n| n.id.clone())
        .filter(|id| !risk.contains(id))
        .collect();
    let router = RiskAwareRouter::new();

    let mut found = 0;
    for (source, destination) in safe.iter().zip(safe.iter().rev()).take(40) {
        match router.route(&graph, &risk, source, destination).unwrap() {
            RouteOutcome::Found(path) => {
                found += 1;
                assert_eq!(path.source(), Some(source));
                assert_eq!(path.destination(), Some(destination));
                assert!(path.nodes.iter().all(|id| !risk.contains(id)));
                for hop in path.nodes.windows(2) {
                    assert!(graph.edge_weight(&hop[0], &hop[1]).is_some());
                }
            }
            RouteOutcome::NoPath(reason) => assert_eq!(reason, NoPathReason::Unreachable),
        }
    }
    assert!(found > 0);
}

#[test]
fn test_disconnected_pair_has_no_path() {
    let mut graph = GeoGraph::new();
    graph.add_node("A", "A", 0.0, 0.0).unwrap();
    graph.add_node("B", "B", 0.0, 90.0).unwrap();
    graph.connect_by_proximity(600.0);

    let outcome = RiskAwareRouter::new()
        .route(&graph, &RiskSet::new(), &"A".into(), &"B".into())
        .unwrap();
    assert!(!outcome.is_found());
    assert_eq!(outcome, RouteOutcome::NoPath(NoPathReason::Unreachable));
}

#[test]
fn test_routing_is_repeatable() {
    let graph = scattered_graph(250, 300.0);
    let risk = compute_risk_set(&graph, &[quake(38.0, -112.0)], 200.0);
    let source: NodeId = "F0001".into();
    let destination: NodeId = "F0200".into();

    let router = RiskAwareRouter::new();
    let first = router.route(&graph, &risk, &source, &destination).unwrap();
    for _ in 0..5 {
        assert_eq!(router.route(&graph, &risk, &source, &destination).unwrap(), first);
    }
}
