use crate::catalog;
use crate::coordinator::Coordinator;
use crate::installers::{NativeInstaller, Toolchain};
use crate::probe::CommandProbe;
use crate::state::{Category, StateStore};
use crate::utils;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

pub fn run(state_path: &Path) -> Result<()> {
    println!("{}", "=".repeat(60).bright_blue());
    println!("{}", "devup setup - bootstrap this machine".bright_blue().bold());
    println!("{}", "=".repeat(60).bright_blue());
    println!();

    validate_os()?;

    let native = NativeInstaller::detect().context(
        "no package manager found; install Homebrew (https://brew.sh) \
         or use a Debian-based Linux with apt",
    )?;
    println!("  {} package manager available", "✓".green());

    ensure_version_manager(&native)?;

    install_terminal_tools(state_path, native)?;

    println!();
    println!("{}", "=".repeat(60).bright_green());
    println!("{}", "✓ devup setup completed".bright_green().bold());
    println!("{}", "=".repeat(60).bright_green());

    Ok(())
}

fn validate_os() -> Result<()> {
    match std::env::consts::OS {
        "macos" | "linux" => {
            println!("  {} {} is supported", "✓".green(), std::env::consts::OS);
            Ok(())
        }
        other => bail!("unsupported operating system: {}", other),
    }
}

/// Make sure `mise` is on PATH, installing it natively when absent.
fn ensure_version_manager(native: &NativeInstaller) -> Result<()> {
    if utils::command_exists("mise") {
        println!("  {} mise is installed", "✓".green());
        return Ok(());
    }

    println!("  {} mise not found, installing...", "→".yellow());
    native
        .install_package("mise")
        .context("failed to install the mise version manager")?;

    Ok(())
}

/// Install every terminal tool not already on the machine, recording each
/// one in the state file. No interactive selection here; the terminal-tool
/// set is fixed.
fn install_terminal_tools(state_path: &Path, native: NativeInstaller) -> Result<()> {
    println!();
    println!("{}", "Installing terminal tools...".cyan());

    let mut store = StateStore::load(state_path)?;
    let mut coord = Coordinator::new(Category::TerminalTools, catalog::TERMINAL_TOOLS, &mut store);

    coord.detect(&CommandProbe::new())?;

    let missing: Vec<String> = catalog::TERMINAL_TOOLS
        .iter()
        .filter(|e| !store.is_accounted(&e.canonical_spec(), Category::TerminalTools))
        .map(|e| e.display_name.to_string())
        .collect();

    let mut coord = Coordinator::new(Category::TerminalTools, catalog::TERMINAL_TOOLS, &mut store);
    let toolchain = Toolchain::new(native);
    coord.install(&toolchain, &missing)?;

    Ok(())
}
