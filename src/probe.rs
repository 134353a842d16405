use crate::catalog::CatalogEntry;
use crate::error::SetupError;
use crate::utils;

/// Presence check for catalog entries.
pub trait Probe {
    /// Whether the entry's binary already exists on this machine.
    fn is_present(&self, entry: &CatalogEntry) -> bool;
}

/// Probes by running the entry's version-check command and trusting the
/// exit code: zero means present, anything else means absent. Output is
/// never parsed, so a broken shim that still exits zero reads as present.
pub struct CommandProbe;

impl CommandProbe {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, entry: &CatalogEntry) -> Result<bool, SetupError> {
        let command = entry.probe_command();
        let mut parts = command.split_whitespace();
        let program = parts.next().unwrap_or(entry.name);
        let args: Vec<&str> = parts.collect();

        let output =
            utils::execute_command(program, &args).map_err(|source| SetupError::Probe {
                name: entry.name.to_string(),
                source,
            })?;

        Ok(output.status.success())
    }
}

impl Probe for CommandProbe {
    fn is_present(&self, entry: &CatalogEntry) -> bool {
        match self.run(entry) {
            Ok(present) => present,
            Err(e) => {
                // A probe that cannot even start reads as absent, so the
                // item stays on offer rather than blocking detection.
                log::debug!("{}", e);
                false
            }
        }
    }
}
