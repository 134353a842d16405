use crate::catalog::CatalogEntry;
use crate::coordinator::Coordinator;
use crate::installers::{NativeInstaller, Toolchain};
use crate::probe::CommandProbe;
use crate::prompt::InquirePrompt;
use crate::state::{Category, StateStore};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Shared choose-and-install flow behind `devup languages` / `devup databases`.
pub(super) fn run(
    state_path: &Path,
    category: Category,
    catalog: &'static [CatalogEntry],
) -> Result<()> {
    println!("{}", "=".repeat(60).bright_blue());
    println!(
        "{}",
        format!("devup - set up {}", category).bright_blue().bold()
    );
    println!("{}", "=".repeat(60).bright_blue());
    println!();

    let mut store = StateStore::load(state_path)?;
    let mut coord = Coordinator::new(category, catalog, &mut store);

    coord.detect(&CommandProbe::new())?;

    let mut prompt = InquirePrompt::new();
    let selection = coord.choose(&mut prompt)?;

    if selection.is_empty() {
        println!();
        println!("{}", "Nothing selected.".yellow());
        return Ok(());
    }

    let toolchain = Toolchain::new(NativeInstaller::detect()?);
    coord.install(&toolchain, &selection)?;

    println!();
    println!("{}", "=".repeat(60).bright_green());
    println!("{}", "✓ devup finished".bright_green().bold());
    println!("{}", "=".repeat(60).bright_green());

    Ok(())
}
