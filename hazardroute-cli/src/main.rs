//! HazardRoute CLI - Command-line interface
//!
//! Builds a facility graph from CSV, overlays recent earthquakes, and
//! routes around the facilities they put at risk.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::common::HazardArgs;
use commands::config::ConfigCommands;
use commands::graph::GraphArgs;
use commands::risk::RiskArgs;
use commands::route::RouteArgs;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "hazardroute")]
#[command(version = hazardroute::VERSION)]
#[command(about = "Risk-aware routing between facilities during hazard events", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.hazardroute/config.ini
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess hazards and find the shortest safe route between two facilities
    Route {
        /// Facility CSV with columns id,name,lat,lon
        #[arg(long, value_name = "CSV")]
        facilities: PathBuf,

        /// Source facility id [config: routing.source]
        #[arg(long)]
        from: Option<String>,

        /// Destination facility id [config: routing.destination]
        #[arg(long)]
        to: Option<String>,

        /// Link facilities within this many km [config: routing.proximity_threshold_km]
        #[arg(long, value_name = "KM")]
        threshold_km: Option<f64>,

        #[command(flatten)]
        hazard: HazardArgs,

        /// Also write the full report as JSON to this file
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the report as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// List facilities inside a hazard's danger radius
    Risk {
        /// Facility CSV with columns id,name,lat,lon
        #[arg(long, value_name = "CSV")]
        facilities: PathBuf,

        #[command(flatten)]
        hazard: HazardArgs,

        /// Print the risk set as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the facility graph
    Graph {
        /// Facility CSV with columns id,name,lat,lon
        #[arg(long, value_name = "CSV")]
        facilities: PathBuf,

        /// Link facilities within this many km [config: routing.proximity_threshold_km]
        #[arg(long, value_name = "KM")]
        threshold_km: Option<f64>,

        /// Print nodes and edges as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Config { command } => commands::config::run(command, config_path),
        Commands::Route {
            facilities,
            from,
            to,
            threshold_km,
            hazard,
            output,
            json,
        } => {
            let runner = CliRunner::new(config_path, cli.debug)?;
            commands::route::run(
                &runner,
                RouteArgs {
                    facilities,
                    from,
                    to,
                    threshold_km,
                    hazard,
                    output,
                    json,
                },
            )
        }
        Commands::Risk {
            facilities,
            hazard,
            json,
        } => {
            let runner = CliRunner::new(config_path, cli.debug)?;
            commands::risk::run(
                &runner,
                RiskArgs {
                    facilities,
                    hazard,
                    json,
                },
            )
        }
        Commands::Graph {
            facilities,
            threshold_km,
            json,
        } => {
            let runner = CliRunner::new(config_path, cli.debug)?;
            commands::graph::run(
                &runner,
                GraphArgs {
                    facilities,
                    threshold_km,
                    json,
                },
            )
        }
    }
}
