//! Strata CLI - Layered Vector-Transformation Engine
//!
//! Command-line interface for the strata engine.

use clap::Parser;
use env_logger::Env;
use log::info;

use strata::cli::{commands, Cli, Commands};
use strata::{EngineConfig, Result};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    info!("Strata engine v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd, &config),
        None => {
            println!("Strata engine v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands, config: &EngineConfig) -> Result<()> {
    match cmd {
        Commands::Init {
            state,
            layers,
            sub_layers,
        } => commands::init(&state, layers, sub_layers, config),
        Commands::Info { state } => commands::show_state(&state),
        Commands::Respond {
            text,
            layers,
            sub_layers,
        } => commands::respond(&text, layers, sub_layers, config),
        Commands::Repl {
            dir,
            layers,
            sub_layers,
        } => commands::repl(&dir, layers, sub_layers, config),
    }
}
