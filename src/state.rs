use crate::error::{Result, SetupError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Installable categories, each backed by its own field in the state file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Languages,
    Databases,
    TerminalTools,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Languages => "languages",
            Category::Databases => "databases",
            Category::TerminalTools => "terminal tools",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryState {
    /// Canonical specs this tool installed itself.
    #[serde(default)]
    pub installed_by_tool: BTreeSet<String>,

    /// Canonical specs detected on the machine but not installed by us.
    #[serde(default)]
    pub pre_existing: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateRecord {
    #[serde(default)]
    pub languages: CategoryState,

    #[serde(default)]
    pub databases: CategoryState,

    #[serde(default)]
    pub terminal_tools: CategoryState,
}

impl StateRecord {
    fn category(&self, category: Category) -> &CategoryState {
        match category {
            Category::Languages => &self.languages,
            Category::Databases => &self.databases,
            Category::TerminalTools => &self.terminal_tools,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut CategoryState {
        match category {
            Category::Languages => &mut self.languages,
            Category::Databases => &mut self.databases,
            Category::TerminalTools => &mut self.terminal_tools,
        }
    }
}

/// Owner of the on-disk install-state record.
///
/// Mutations are in-memory only; callers decide when to `save`, which lets
/// a detection pass batch several additions into one disk write.
pub struct StateStore {
    path: PathBuf,
    record: StateRecord,
}

impl StateStore {
    /// Default location: `~/.config/devup/state.toml` (platform config dir).
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("devup/state.toml")
    }

    /// Load the record at `path`. A missing file yields an empty record;
    /// an unreadable or unparsable file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                path: path.to_path_buf(),
                record: StateRecord::default(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let record = toml::from_str(&content).map_err(|source| SetupError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            record,
        })
    }

    /// Persist the record via write-to-temp-then-rename, so a crash
    /// mid-write cannot leave a truncated file behind.
    pub fn save(&self) -> Result<()> {
        let io_err = |source| SetupError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = toml::to_string_pretty(&self.record)
            .expect("state record serializes to TOML");

        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, content).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        log::debug!("State saved to {}", self.path.display());
        Ok(())
    }

    pub fn record(&self) -> &StateRecord {
        &self.record
    }

    pub fn is_installed_by_tool(&self, spec: &str, category: Category) -> bool {
        self.record.category(category).installed_by_tool.contains(spec)
    }

    pub fn is_pre_existing(&self, spec: &str, category: Category) -> bool {
        self.record.category(category).pre_existing.contains(spec)
    }

    /// True when the spec is tracked in either set for the category.
    pub fn is_accounted(&self, spec: &str, category: Category) -> bool {
        self.is_installed_by_tool(spec, category) || self.is_pre_existing(spec, category)
    }

    /// Record a successful install. Drops the spec from `pre_existing` so a
    /// spec is never tracked in both sets. Returns whether anything changed.
    pub fn add_installed_by_tool(&mut self, spec: &str, category: Category) -> bool {
        let state = self.record.category_mut(category);
        let removed = state.pre_existing.remove(spec);
        let inserted = state.installed_by_tool.insert(spec.to_string());
        removed || inserted
    }

    /// Record a detected pre-existing install. A spec already tracked as
    /// installed-by-tool is left alone. Returns whether anything changed.
    pub fn add_pre_existing(&mut self, spec: &str, category: Category) -> bool {
        let state = self.record.category_mut(category);
        if state.installed_by_tool.contains(spec) {
            return false;
        }
        state.pre_existing.insert(spec.to_string())
    }
}
