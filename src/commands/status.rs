use crate::state::{CategoryState, StateStore};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(state_path: &Path) -> Result<()> {
    let store = StateStore::load(state_path)?;
    let record = store.record();

    println!("{}", "devup install state".bright_blue().bold());
    println!("  state file: {}", state_path.display());
    println!();

    print_category("Languages", &record.languages);
    print_category("Databases", &record.databases);
    print_category("Terminal tools", &record.terminal_tools);

    Ok(())
}

fn print_category(title: &str, state: &CategoryState) {
    println!("{}", title.bold());

    if state.installed_by_tool.is_empty() && state.pre_existing.is_empty() {
        println!("  (nothing tracked)");
        println!();
        return;
    }

    for spec in &state.installed_by_tool {
        println!("  {} {} (installed by devup)", "✓".green(), spec);
    }
    for spec in &state.pre_existing {
        println!("  {} {} (pre-existing)", "⊘".yellow(), spec);
    }
    println!();
}
