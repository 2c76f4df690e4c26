//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::io::{self, BufRead, Write};
use std::path::Path;

use log::info;

use crate::config::EngineConfig;
use crate::engine::Model;
use crate::error::Result;
use crate::session::{Session, SessionPaths};
use crate::state;

/// Build a model and write its structural state file.
pub fn init(
    state_path: &Path,
    layers: usize,
    sub_layers: usize,
    config: &EngineConfig,
) -> Result<()> {
    info!("Initializing model state at: {}", state_path.display());

    let model = Model::with_config(layers, sub_layers, config)?;
    model.save_state(state_path)?;

    println!(
        "Model state written: {} ({} groups x {} layers, dimension {})",
        state_path.display(),
        model.layer_count(),
        model.sub_layer_count(),
        model.dimension()
    );
    Ok(())
}

/// Print the shape stored in a state file.
pub fn show_state(state_path: &Path) -> Result<()> {
    let shape = state::load_shape(state_path)?;

    println!("State file: {}", state_path.display());
    println!("Layer groups: {}", shape.layer_count);
    println!("Layers per group: {}", shape.sub_layer_count);
    println!("Total layers: {}", shape.layer_count * shape.sub_layer_count);
    Ok(())
}

/// Run one line of text through a fresh session, without persisting.
pub fn respond(text: &str, layers: usize, sub_layers: usize, config: &EngineConfig) -> Result<()> {
    let mut session = Session::open(layers, sub_layers, config, SessionPaths::default())?;
    let reply = session.respond(text)?;

    print_reply(&reply.text, reply.remark, &reply.learned);
    Ok(())
}

/// Interactive loop reading stdin; 'quit' exits and persists the session.
pub fn repl(dir: &Path, layers: usize, sub_layers: usize, config: &EngineConfig) -> Result<()> {
    let paths = SessionPaths::in_dir(dir);
    let mut session = Session::open(layers, sub_layers, config, paths)?;

    println!("Interactive session started. Type 'quit' to exit.");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        let reply = session.respond(input)?;
        print_reply(&reply.text, reply.remark, &reply.learned);
    }

    session.shutdown()?;
    println!("Goodbye!");
    Ok(())
}

fn print_reply(text: &str, remark: &str, learned: &[String]) {
    for word in learned {
        println!("Learned new word: {word}");
    }
    if text.is_empty() {
        println!("Engine: (no printable output)");
    } else {
        println!("Engine: {text}");
    }
    println!("{remark}");
}
