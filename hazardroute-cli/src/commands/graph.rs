//! Graph command - print the facility graph.

use std::path::PathBuf;

use super::common::resolve_threshold;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the graph command.
pub struct GraphArgs {
    pub facilities: PathBuf,
    pub threshold_km: Option<f64>,
    pub json: bool,
}

/// Run the graph command.
pub fn run(runner: &CliRunner, args: GraphArgs) -> Result<(), CliError> {
    runner.log_startup("graph");

    let threshold_km = resolve_threshold(args.threshold_km, runner.config())?;
    let graph = runner.build_graph(&args.facilities, threshold_km)?.graph;

    // Each undirected link is listed once
    let links: Vec<_> = graph.edges().filter(|e| e.from < e.to).collect();

    if args.json {
        let nodes: Vec<_> = graph.nodes().collect();
        let json = serde_json::json!({
            "threshold_km": threshold_km,
            "nodes": nodes,
            "edges": links,
        });
        let text =
            serde_json::to_string_pretty(&json).map_err(|e| CliError::Output(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    println!(
        "{} facilities, {} links (threshold {} km)",
        graph.node_count(),
        links.len(),
        threshold_km
    );
    println!();
    for node in graph.nodes() {
        println!(
            "  {:<12} {:<30} {:>9.4} {:>10.4}",
            node.id.as_str(),
            node.name,
            node.latitude(),
            node.longitude()
        );
    }
    println!();
    for link in &links {
        println!("  {} <-> {}  {} km", link.from, link.to, link.weight_km);
    }

    Ok(())
}
