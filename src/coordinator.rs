use crate::catalog::CatalogEntry;
use crate::error::Result;
use crate::installers::Installer;
use crate::probe::Probe;
use crate::prompt::{self, ChoicePrompt};
use crate::state::{Category, StateStore};
use colored::Colorize;

/// Per-category driver composing probe, state store, prompt, and installers.
///
/// The three phases run strictly in order: `detect` reconciles the state
/// file with what is already on the machine, `choose` offers the remainder,
/// `install` processes the returned selection in catalog order.
pub struct Coordinator<'a> {
    category: Category,
    catalog: &'static [CatalogEntry],
    store: &'a mut StateStore,
}

impl<'a> Coordinator<'a> {
    pub fn new(
        category: Category,
        catalog: &'static [CatalogEntry],
        store: &'a mut StateStore,
    ) -> Self {
        Self {
            category,
            catalog,
            store,
        }
    }

    /// Probe every catalog entry the state file does not account for yet
    /// and record the ones already on the machine as pre-existing.
    ///
    /// All detections from one pass land in a single batched save; when
    /// nothing new is found, no disk write happens at all.
    pub fn detect(&mut self, probe: &dyn Probe) -> Result<()> {
        let mut changed = false;

        for entry in self.catalog {
            let spec = entry.canonical_spec();
            if self.store.is_accounted(&spec, self.category) {
                continue;
            }

            if probe.is_present(entry) {
                log::info!("Detected pre-existing install: {}", entry.display_name);
                changed |= self.store.add_pre_existing(&spec, self.category);
            }
        }

        if changed {
            self.store.save()?;
        }

        Ok(())
    }

    /// Run the multi-select over entries not yet installed or detected and
    /// return the chosen display names.
    pub fn choose(&mut self, prompt: &mut dyn ChoicePrompt) -> Result<Vec<String>> {
        let mut offered = Vec::new();
        let mut skipped = Vec::new();

        for entry in self.catalog {
            if self.store.is_accounted(&entry.canonical_spec(), self.category) {
                skipped.push(entry.display_name.to_string());
            } else {
                offered.push(entry.display_name.to_string());
            }
        }

        if !skipped.is_empty() {
            println!(
                "  {} Already installed ({}): {}",
                "⊘".yellow(),
                self.category,
                skipped.join(", ")
            );
        }

        if offered.is_empty() {
            println!("  {} All {} are already installed", "✓".green(), self.category);
            return Ok(Vec::new());
        }

        let label = format!("Select {} to install:", self.category);
        prompt::multi_select(prompt, &label, &offered)
    }

    /// Install every selected entry, in catalog order, matching display
    /// names case-insensitively.
    ///
    /// Each success is saved to disk immediately so a later failure cannot
    /// roll it back; each failure is reported and the loop moves on.
    pub fn install(&mut self, installer: &dyn Installer, selection: &[String]) -> Result<()> {
        if selection.is_empty() {
            println!("  {} Nothing selected, nothing to install", "⊘".yellow());
            return Ok(());
        }

        for entry in self.catalog {
            let selected = selection
                .iter()
                .any(|s| s.eq_ignore_ascii_case(entry.display_name));
            if !selected {
                continue;
            }

            match installer.install(entry) {
                Ok(()) => {
                    self.store
                        .add_installed_by_tool(&entry.canonical_spec(), self.category);
                    self.store.save()?;
                    println!("  {} {} installed", "✓".green(), entry.display_name);
                }
                Err(e) => {
                    println!("  {} {}: {}", "❌".red(), entry.display_name, e);
                    println!("    continuing with the next item...");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Strategy;
    use crate::error::SetupError;
    use std::cell::RefCell;
    use std::collections::{HashSet, VecDeque};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    static TEST_LANGUAGES: &[CatalogEntry] = &[
        CatalogEntry {
            name: "node",
            display_name: "Node",
            probe: None,
            strategy: Strategy::VersionManager { version: "lts" },
        },
        CatalogEntry {
            name: "go",
            display_name: "Go",
            probe: Some("go version"),
            strategy: Strategy::VersionManager { version: "latest" },
        },
        CatalogEntry {
            name: "php",
            display_name: "PHP",
            probe: None,
            strategy: Strategy::Native,
        },
    ];

    static TEST_DATABASES: &[CatalogEntry] = &[
        CatalogEntry {
            name: "mysql",
            display_name: "MySQL",
            probe: None,
            strategy: Strategy::Native,
        },
        CatalogEntry {
            name: "redis",
            display_name: "Redis",
            probe: Some("redis-server --version"),
            strategy: Strategy::Native,
        },
        CatalogEntry {
            name: "sqlite",
            display_name: "SQLite",
            probe: Some("sqlite3 --version"),
            strategy: Strategy::Native,
        },
    ];

    struct FakeProbe {
        present: HashSet<&'static str>,
    }

    impl Probe for FakeProbe {
        fn is_present(&self, entry: &CatalogEntry) -> bool {
            self.present.contains(entry.name)
        }
    }

    struct ScriptedPrompt {
        picks: VecDeque<&'static str>,
        menus: Vec<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn new(picks: &[&'static str]) -> Self {
            Self {
                picks: picks.iter().copied().collect(),
                menus: Vec::new(),
            }
        }
    }

    impl ChoicePrompt for ScriptedPrompt {
        fn choose(&mut self, _label: &str, options: &[String]) -> Result<String> {
            self.menus.push(options.to_vec());
            self.picks
                .pop_front()
                .map(|p| p.to_string())
                .ok_or_else(|| SetupError::Prompt("script exhausted".to_string()))
        }
    }

    /// Records install calls by canonical spec; fails the configured ones.
    struct RecordingInstaller {
        calls: RefCell<Vec<String>>,
        failing: HashSet<&'static str>,
    }

    impl RecordingInstaller {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                failing: HashSet::new(),
            }
        }

        fn failing(names: &[&'static str]) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                failing: names.iter().copied().collect(),
            }
        }
    }

    impl Installer for RecordingInstaller {
        fn install(&self, entry: &CatalogEntry) -> Result<()> {
            if self.failing.contains(entry.name) {
                return Err(SetupError::Install {
                    name: entry.name.to_string(),
                    reason: "simulated failure".to_string(),
                });
            }
            self.calls.borrow_mut().push(entry.canonical_spec());
            Ok(())
        }
    }

    fn fresh_store() -> (TempDir, PathBuf, StateStore) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.toml");
        let store = StateStore::load(&path).unwrap();
        (dir, path, store)
    }

    #[test]
    fn fresh_state_select_then_install_dispatches_per_strategy() {
        let (_dir, _path, mut store) = fresh_store();
        let mut coord = Coordinator::new(Category::Languages, TEST_LANGUAGES, &mut store);

        let mut prompt = ScriptedPrompt::new(&["Node", "PHP", "Done"]);
        let selection = coord.choose(&mut prompt).unwrap();
        assert_eq!(selection, vec!["Node".to_string(), "PHP".to_string()]);

        let installer = RecordingInstaller::new();
        coord.install(&installer, &selection).unwrap();

        assert_eq!(
            *installer.calls.borrow(),
            vec!["node@lts".to_string(), "php".to_string()]
        );
        assert!(store.is_installed_by_tool("node@lts", Category::Languages));
        assert!(store.is_installed_by_tool("php", Category::Languages));
        assert!(!store.is_installed_by_tool("go@latest", Category::Languages));
    }

    #[test]
    fn detection_hides_pre_existing_items_from_the_menu() {
        let (_dir, _path, mut store) = fresh_store();
        let mut coord = Coordinator::new(Category::Databases, TEST_DATABASES, &mut store);

        let probe = FakeProbe {
            present: ["redis"].into_iter().collect(),
        };
        coord.detect(&probe).unwrap();
        assert!(store.is_pre_existing("redis", Category::Databases));

        let mut coord = Coordinator::new(Category::Databases, TEST_DATABASES, &mut store);
        let mut prompt = ScriptedPrompt::new(&["All"]);
        let selection = coord.choose(&mut prompt).unwrap();

        assert_eq!(selection, vec!["MySQL".to_string(), "SQLite".to_string()]);
        assert!(!prompt.menus[0].contains(&"Redis".to_string()));
    }

    #[test]
    fn second_detection_pass_writes_nothing() {
        let (_dir, path, mut store) = fresh_store();
        let probe = FakeProbe {
            present: ["redis", "sqlite"].into_iter().collect(),
        };

        let mut coord = Coordinator::new(Category::Databases, TEST_DATABASES, &mut store);
        coord.detect(&probe).unwrap();
        assert!(path.exists());

        // Delete the file; an idempotent second pass must not recreate it.
        fs::remove_file(&path).unwrap();
        let mut coord = Coordinator::new(Category::Databases, TEST_DATABASES, &mut store);
        coord.detect(&probe).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn one_failed_install_does_not_abort_the_rest() {
        let (_dir, _path, mut store) = fresh_store();
        let mut coord = Coordinator::new(Category::Languages, TEST_LANGUAGES, &mut store);

        let installer = RecordingInstaller::failing(&["node"]);
        let selection = vec!["Node".to_string(), "PHP".to_string()];
        coord.install(&installer, &selection).unwrap();

        assert_eq!(*installer.calls.borrow(), vec!["php".to_string()]);
        assert!(store.is_installed_by_tool("php", Category::Languages));
        assert!(!store.is_installed_by_tool("node@lts", Category::Languages));
    }

    #[test]
    fn install_order_follows_the_catalog_not_the_selection() {
        let (_dir, _path, mut store) = fresh_store();
        let mut coord = Coordinator::new(Category::Languages, TEST_LANGUAGES, &mut store);

        let installer = RecordingInstaller::new();
        // Selection comes back in pick order; install runs in catalog order.
        let selection = vec!["php".to_string(), "GO".to_string(), "Node".to_string()];
        coord.install(&installer, &selection).unwrap();

        assert_eq!(
            *installer.calls.borrow(),
            vec![
                "node@lts".to_string(),
                "go@latest".to_string(),
                "php".to_string()
            ]
        );
    }

    #[test]
    fn empty_selection_is_a_no_op() {
        let (_dir, path, mut store) = fresh_store();
        let mut coord = Coordinator::new(Category::Languages, TEST_LANGUAGES, &mut store);

        let installer = RecordingInstaller::new();
        coord.install(&installer, &[]).unwrap();

        assert!(installer.calls.borrow().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn fully_accounted_catalog_skips_the_prompt() {
        let (_dir, _path, mut store) = fresh_store();
        store.add_installed_by_tool("mysql", Category::Databases);
        store.add_pre_existing("redis", Category::Databases);
        store.add_pre_existing("sqlite", Category::Databases);

        let mut coord = Coordinator::new(Category::Databases, TEST_DATABASES, &mut store);
        let mut prompt = ScriptedPrompt::new(&[]);
        let selection = coord.choose(&mut prompt).unwrap();

        assert!(selection.is_empty());
        assert!(prompt.menus.is_empty());
    }
}
