/// How an item gets installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Installed through the OS package manager (brew/apt).
    Native,
    /// Installed through the version manager at a pinned version.
    VersionManager { version: &'static str },
}

/// A statically configured installable item.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Canonical lowercase key.
    pub name: &'static str,

    /// User-facing name shown in menus.
    pub display_name: &'static str,

    /// Presence-check command. When unset, `<name> --version` is probed.
    pub probe: Option<&'static str>,

    pub strategy: Strategy,
}

impl CatalogEntry {
    /// Stable identity string used in the state file: `name` for native
    /// installs, `name@version` for version-managed ones.
    pub fn canonical_spec(&self) -> String {
        match &self.strategy {
            Strategy::Native => self.name.to_string(),
            Strategy::VersionManager { version } => format!("{}@{}", self.name, version),
        }
    }

    pub fn probe_command(&self) -> String {
        match self.probe {
            Some(cmd) => cmd.to_string(),
            None => format!("{} --version", self.name),
        }
    }
}

/// Languages offered by `devup languages`.
pub static LANGUAGES: &[CatalogEntry] = &[
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
        name: "rust",
        display_name: "Rust",
        probe: Some("rustc --version"),
        strategy: Strategy::VersionManager { version: "latest" },
    },
    CatalogEntry {
        name: "python",
        display_name: "Python",
        probe: Some("python3 --version"),
        strategy: Strategy::VersionManager { version: "latest" },
    },
    CatalogEntry {
        name: "java",
        display_name: "Java",
        probe: Some("java -version"),
        strategy: Strategy::VersionManager { version: "latest" },
    },
    CatalogEntry {
        name: "php",
        display_name: "PHP",
        probe: None,
        strategy: Strategy::Native,
    },
    CatalogEntry {
        name: "elixir",
        display_name: "Elixir",
        probe: None,
        strategy: Strategy::VersionManager { version: "latest" },
    },
    CatalogEntry {
        name: "ruby",
        display_name: "Ruby",
        probe: None,
        strategy: Strategy::VersionManager { version: "latest" },
    },
];

/// Databases offered by `devup databases`.
pub static DATABASES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "postgresql",
        display_name: "PostgreSQL",
        probe: Some("psql --version"),
        strategy: Strategy::Native,
    },
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
        name: "mongodb",
        display_name: "MongoDB",
        probe: Some("mongod --version"),
        strategy: Strategy::Native,
    },
    CatalogEntry {
        name: "sqlite",
        display_name: "SQLite",
        probe: Some("sqlite3 --version"),
        strategy: Strategy::Native,
    },
];

/// Terminal tools installed unconditionally by `devup setup`.
pub static TERMINAL_TOOLS: &[CatalogEntry] = &[
    CatalogEntry {
        name: "starship",
        display_name: "Starship",
        probe: None,
        strategy: Strategy::Native,
    },
    CatalogEntry {
        name: "tmux",
        display_name: "tmux",
        probe: Some("tmux -V"),
        strategy: Strategy::Native,
    },
    CatalogEntry {
        name: "neovim",
        display_name: "Neovim",
        probe: Some("nvim --version"),
        strategy: Strategy::Native,
    },
    CatalogEntry {
        name: "neofetch",
        display_name: "neofetch",
        probe: None,
        strategy: Strategy::Native,
    },
];

/// Find an entry by display name, case-insensitively.
pub fn find_by_display<'a>(catalog: &'a [CatalogEntry], display: &str) -> Option<&'a CatalogEntry> {
    catalog
        .iter()
        .find(|e| e.display_name.eq_ignore_ascii_case(display))
}
