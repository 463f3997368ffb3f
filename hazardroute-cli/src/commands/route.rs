//! Route command - one full assessment cycle.
//!
//! Fetches hazards, classifies facilities, and finds the shortest route that
//! avoids every risky facility.

use std::path::PathBuf;

use hazardroute::assessment::{
    AssessmentParams, AssessmentReport, ReportParameters, RiskAssessment,
};
use hazardroute::graph::NodeId;
use hazardroute::routing::NoPathReason;

use super::common::{resolve_threshold, HazardArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the route command.
pub struct RouteArgs {
    pub facilities: PathBuf,
    pub from: Option<String>,
    pub to: Option<String>,
    pub threshold_km: Option<f64>,
    pub hazard: HazardArgs,
    pub output: Option<PathBuf>,
    pub json: bool,
}

/// Run the route command.
pub fn run(runner: &CliRunner, args: RouteArgs) -> Result<(), CliError> {
    runner.log_startup("route");
    let config = runner.config();

    let source = endpoint(args.from, &config.routing.source, "--from", "source")?;
    let destination = endpoint(args.to, &config.routing.destination, "--to", "destination")?;

    let threshold_km = resolve_threshold(args.threshold_km, config)?;
    let params = AssessmentParams::new(source, destination)
        .with_hazard_radius_km(args.hazard.radius_km(config)?)
        .with_query(args.hazard.query(config)?);

    let outcome = runner.build_graph(&args.facilities, threshold_km)?;
    let feed = runner.hazard_feed(args.hazard.hazards.as_ref())?;

    let report = RiskAssessment::new(&outcome.graph, threshold_km).run(feed.as_ref(), &params)?;

    if let Some(path) = &args.output {
        report.write_json(path)?;
    }

    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print_summary(&report);
        if let Some(path) = &args.output {
            println!();
            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}

fn endpoint(
    flag: Option<String>,
    configured: &Option<String>,
    flag_name: &str,
    key: &str,
) -> Result<NodeId, CliError> {
    flag.or_else(|| configured.clone())
        .map(NodeId::from)
        .ok_or_else(|| {
            CliError::Config(format!(
                "No {} facility. Pass {} or set routing.{} in config.ini",
                key, flag_name, key
            ))
        })
}

fn print_summary(report: &AssessmentReport) {
    let params = &report.parameters;

    println!("Hazards: {} ({})", report.hazards.len(), hazard_filter_label(params));
    for hazard in &report.hazards {
        println!(
            "  M{:.1}  {}  {}",
            hazard.magnitude,
            hazard.observed_at.format("%Y-%m-%d %H:%M UTC"),
            hazard.description
        );
    }
    println!();

    let risky: Vec<_> = report.risky_nodes().collect();
    println!(
        "Risky facilities: {} of {} (within {} km of a hazard)",
        risky.len(),
        report.nodes.len(),
        params.hazard_radius_km
    );
    for node in risky {
        match node.nearest_hazard_km {
            Some(km) => println!("  {}  {}  ({} km)", node.id, node.name, km),
            None => println!("  {}  {}", node.id, node.name),
        }
    }
    println!();

    match report.path() {
        Some(path) => {
            println!("Route {} → {}:", params.source, params.destination);
            println!("  {}", path.display_chain());
            println!("  Total: {} km over {} hops", path.total_km, path.hop_count());
        }
        None => {
            let detail = no_path_detail(report.route.reason, report.risk_set.is_empty());
            println!("No safe path available: {}", detail);
        }
    }
}

/// Describe the feed filter; snapshot feeds carry no look-back window.
fn hazard_filter_label(params: &ReportParameters) -> String {
    match params.window_hours {
        Some(hours) => format!(
            "M{}+, last {}h, feed: {}",
            params.min_magnitude, hours, params.feed
        ),
        None => format!("M{}+, feed: {}", params.min_magnitude, params.feed),
    }
}

fn no_path_detail(reason: Option<NoPathReason>, no_risky_facilities: bool) -> &'static str {
    match reason {
        Some(NoPathReason::EndpointExcluded) => {
            "the source or destination is inside a hazard zone"
        }
        _ if no_risky_facilities => "the facilities are not linked within the proximity threshold",
        _ => "the facilities are not connected once risky facilities are removed",
    }
}
