//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show` and `config init`.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use hazardroute::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration (file values over defaults)
    Show,

    /// Write a commented config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand.
///
/// `config_path` overrides the default location, as with the global `--config` flag.
pub fn run(command: ConfigCommands, config_path: Option<&Path>) -> Result<(), CliError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path);

    match command {
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Show => run_show(&path),
        ConfigCommands::Init { force } => run_init(path, force),
    }
}

fn run_show(path: &Path) -> Result<(), CliError> {
    let config = ConfigFile::load_from(path)?;
    let source = if path.exists() {
        path.display().to_string()
    } else {
        "defaults (no config file)".to_string()
    };

    println!("Configuration from {}", source);
    println!();
    println!("[routing]");
    println!("  proximity_threshold_km = {}", config.routing.proximity_threshold_km);
    println!("  hazard_radius_km       = {}", config.routing.hazard_radius_km);
    println!(
        "  source                 = {}",
        config.routing.source.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  destination            = {}",
        config.routing.destination.as_deref().unwrap_or("(not set)")
    );
    println!();
    println!("[feed]");
    println!("  url           = {}", config.feed.url);
    println!("  min_magnitude = {}", config.feed.min_magnitude);
    println!("  window_hours  = {}", config.feed.window_hours);
    println!("  timeout       = {}", config.feed.timeout);
    println!();
    println!("[logging]");
    println!("  file = {}", config.logging.file.display());

    Ok(())
}

fn run_init(path: PathBuf, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    ConfigFile::default().save_to(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
