use crate::error::{Result, SetupError};
use crate::utils;
use std::collections::HashSet;
use std::process::Command;

/// Which OS package manager backs this machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Brew,
    Apt,
}

/// Adapter over the OS package manager (Homebrew on macOS, apt on Linux).
pub struct NativeInstaller {
    backend: Backend,
}

impl NativeInstaller {
    /// Pick whichever package manager is on PATH, brew first.
    pub fn detect() -> Result<Self> {
        if utils::command_exists("brew") {
            return Ok(Self {
                backend: Backend::Brew,
            });
        }
        if utils::command_exists("apt-get") {
            return Ok(Self {
                backend: Backend::Apt,
            });
        }

        Err(SetupError::Validation(
            "no supported package manager found (need brew or apt-get)".to_string(),
        ))
    }

    /// Create brew command with HOMEBREW_NO_AUTO_UPDATE=1.
    fn brew_command(&self) -> Command {
        let mut cmd = Command::new("brew");
        cmd.env("HOMEBREW_NO_AUTO_UPDATE", "1");
        cmd
    }

    /// List installed brew formulae.
    fn list_brew_formulae(&self) -> Result<HashSet<String>> {
        let output = self
            .brew_command()
            .args(["list", "--formula"])
            .output()
            .map_err(|e| SetupError::Install {
                name: "brew".to_string(),
                reason: format!("failed to list formulae: {}", e),
            })?;

        if !output.status.success() {
            return Err(SetupError::Install {
                name: "brew".to_string(),
                reason: "brew list --formula failed".to_string(),
            });
        }

        let installed = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(installed)
    }

    /// Check if a package is installed, per the backend's own bookkeeping.
    pub fn is_package_installed(&self, name: &str) -> Result<bool> {
        match self.backend {
            Backend::Brew => Ok(self.list_brew_formulae()?.contains(name)),
            Backend::Apt => {
                let ok = utils::execute_command_success("dpkg", &["-s", name]).map_err(|e| {
                    SetupError::Install {
                        name: name.to_string(),
                        reason: format!("dpkg -s failed to run: {}", e),
                    }
                })?;
                Ok(ok)
            }
        }
    }

    /// Install a single package, skipping when already installed.
    pub fn install_package(&self, name: &str) -> Result<()> {
        if self.is_package_installed(name)? {
            log::info!("✓ {} already installed", name);
            return Ok(());
        }

        log::info!("→ Installing {} (native)...", name);

        let status = match self.backend {
            Backend::Brew => self.brew_command().args(["install", name]).status(),
            Backend::Apt => Command::new("sudo")
                .args(["apt-get", "install", "-y", name])
                .status(),
        }
        .map_err(|e| SetupError::Install {
            name: name.to_string(),
            reason: format!("failed to spawn installer: {}", e),
        })?;

        if !status.success() {
            return Err(SetupError::Install {
                name: name.to_string(),
                reason: "package manager reported failure".to_string(),
            });
        }

        log::info!("✓ {} installed", name);
        Ok(())
    }
}
