//! gridforge command-line interface.
//!
//! Renders randomly filled maps to any export format, prints grid sizing,
//! and applies display presets to the persisted config store.

mod args;
mod commands;

use anyhow::Result;
use args::{Cli, Command};
use clap::Parser;
use gridforge::interact::{JsonFileStore, MemoryStore};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let limits = cli.limits();

    match (cli.command, cli.config_file) {
        (Command::Render(args), Some(path)) => commands::render(JsonFileStore::new(path), limits, args),
        (Command::Render(args), None) => commands::render(MemoryStore::new(), limits, args),
        (Command::Dims(args), Some(path)) => commands::dims(JsonFileStore::new(path), limits, args),
        (Command::Dims(args), None) => commands::dims(MemoryStore::new(), limits, args),
        (Command::Preset(args), Some(path)) => commands::preset(JsonFileStore::new(path), limits, args),
        (Command::Preset(args), None) => {
            tracing::warn!("no --config-file given; preset is printed but not persisted");
            commands::preset(MemoryStore::new(), limits, args)
        }
    }
}
