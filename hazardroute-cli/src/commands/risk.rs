//! Risk command - classify facilities against the current hazard snapshot.

use std::path::PathBuf;

use hazardroute::hazard::HazardOverlay;

use super::common::HazardArgs;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the risk command.
pub struct RiskArgs {
    pub facilities: PathBuf,
    pub hazard: HazardArgs,
    pub json: bool,
}

/// Run the risk command.
pub fn run(runner: &CliRunner, args: RiskArgs) -> Result<(), CliError> {
    runner.log_startup("risk");
    let config = runner.config();

    let radius_km = args.hazard.radius_km(config)?;
    let query = args.hazard.query(config)?;

    let graph = runner.load_facilities(&args.facilities)?.graph;

    let feed = runner.hazard_feed(args.hazard.hazards.as_ref())?;
    let hazards = feed.fetch(&query).map_err(|source| CliError::Feed {
        feed: feed.name().to_string(),
        source,
    })?;

    let overlay = HazardOverlay::new(radius_km);
    let risk_set = overlay.risk_set(&graph, &hazards);

    if args.json {
        let json = serde_json::to_string_pretty(&risk_set)
            .map_err(|e| CliError::Output(e.to_string()))?;
        println!("{}", json);
        return Ok(());
    }

    println!(
        "{} hazards, {} of {} facilities within {} km",
        hazards.len(),
        risk_set.len(),
        graph.node_count(),
        radius_km
    );

    for exposure in overlay
        .exposures(&graph, &hazards)
        .into_iter()
        .filter(|e| e.at_risk)
    {
        let name = graph.node(&exposure.node).map_or("", |n| n.name.as_str());
        let hazard = &hazards[exposure.hazard_index];
        println!(
            "  {}  {}  {:.1} km from M{:.1} {}",
            exposure.node, name, exposure.distance_km, hazard.magnitude, hazard.description
        );
    }

    Ok(())
}
