//! CLI Module
//!
//! Command-line interface for the strata engine.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strata - layered adaptive vector-transformation engine
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON engine configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a model and persist its structural state
    Init {
        /// Path for the state file
        #[arg(default_value = "model_state.bin")]
        state: PathBuf,

        /// Number of layer groups
        #[arg(short, long, default_value_t = 4)]
        layers: usize,

        /// Number of layers per group
        #[arg(short, long, default_value_t = 4)]
        sub_layers: usize,
    },

    /// Print the shape stored in a state file
    Info {
        /// Path to the state file
        state: PathBuf,
    },

    /// Run one line of text through a fresh session
    Respond {
        /// Input text
        text: String,

        /// Number of layer groups
        #[arg(short, long, default_value_t = 4)]
        layers: usize,

        /// Number of layers per group
        #[arg(short, long, default_value_t = 4)]
        sub_layers: usize,
    },

    /// Interactive session; 'quit' exits and persists everything
    Repl {
        /// Directory holding the session files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Number of layer groups
        #[arg(short, long, default_value_t = 4)]
        layers: usize,

        /// Number of layers per group
        #[arg(short, long, default_value_t = 4)]
        sub_layers: usize,
    },
}
