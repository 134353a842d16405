mod catalog;
mod cli;
mod commands;
mod coordinator;
mod error;
mod installers;
mod probe;
mod prompt;
mod state;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    // Set verbose logging if requested
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let state_path: PathBuf = cli
        .state
        .unwrap_or_else(state::StateStore::default_path);

    match cli.command {
        Command::Setup => {
            commands::setup::run(&state_path)?;
        }
        Command::Languages => {
            commands::languages::run(&state_path)?;
        }
        Command::Databases => {
            commands::databases::run(&state_path)?;
        }
        Command::Status => {
            commands::status::run(&state_path)?;
        }
    }

    Ok(())
}
