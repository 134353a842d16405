use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devup")]
#[command(author, version, about, long_about = None)]
#[command(about = "A thin orchestrator for developer workstation bootstrap")]
pub struct Cli {
    /// Path to the install-state file
    #[arg(short, long, global = true)]
    pub state: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the host and install package manager, version manager, and terminal tools
    Setup,

    /// Choose and install programming languages
    Languages,

    /// Choose and install databases
    Databases,

    /// Show what devup has installed and what it found pre-existing
    Status,
}
