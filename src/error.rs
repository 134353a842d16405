use std::path::PathBuf;
use thiserror::Error;

/// Error classes for the bootstrap core.
///
/// Per-item install failures are reported and swallowed by the coordinator
/// loop; everything else propagates to the command layer, which prints and
/// exits non-zero.
#[derive(Debug, Error)]
pub enum SetupError {
    /// State file could not be read, parsed, or written.
    #[error("state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// State file exists but is not valid TOML.
    #[error("state file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Interactive prompt was aborted or cancelled.
    #[error("prompt aborted: {0}")]
    Prompt(String),

    /// A required adapter parameter was empty.
    #[error("invalid argument: {0}")]
    Validation(String),

    /// Probe subprocess could not be started at all.
    #[error("probe for '{name}' could not run: {source}")]
    Probe {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// An installer adapter reported failure for one item.
    #[error("install of '{name}' failed: {reason}")]
    Install { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, SetupError>;
