use crate::error::{Result, SetupError};
use std::process::Command;

/// Adapter over `mise`, the language-version manager.
pub struct VersionManagerInstaller;

impl VersionManagerInstaller {
    pub fn new() -> Self {
        Self
    }

    /// Activate `name@version` globally, installing it if needed.
    pub fn use_global(&self, name: &str, version: &str) -> Result<()> {
        if name.is_empty() {
            return Err(SetupError::Validation(
                "language name must not be empty".to_string(),
            ));
        }
        if version.is_empty() {
            return Err(SetupError::Validation(format!(
                "version for '{}' must not be empty",
                name
            )));
        }

        let tool = format!("{}@{}", name, version);
        log::info!("→ Installing {} (mise)...", tool);

        let status = Command::new("mise")
            .args(["use", "--global", &tool])
            .status()
            .map_err(|e| SetupError::Install {
                name: name.to_string(),
                reason: format!("failed to spawn mise: {}", e),
            })?;

        if !status.success() {
            return Err(SetupError::Install {
                name: name.to_string(),
                reason: format!("mise use --global {} failed", tool),
            });
        }

        log::info!("✓ {} installed", tool);
        Ok(())
    }
}
