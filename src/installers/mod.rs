pub mod native;
pub mod version_manager;

pub use native::NativeInstaller;
pub use version_manager::VersionManagerInstaller;

use crate::catalog::{CatalogEntry, Strategy};
use crate::error::Result;

/// Single install seam the coordinators dispatch through.
pub trait Installer {
    fn install(&self, entry: &CatalogEntry) -> Result<()>;
}

/// Routes each entry to the OS package manager or the version manager
/// according to its configured strategy.
pub struct Toolchain {
    native: NativeInstaller,
    versions: VersionManagerInstaller,
}

impl Toolchain {
    pub fn new(native: NativeInstaller) -> Self {
        Self {
            native,
            versions: VersionManagerInstaller::new(),
        }
    }
}

impl Installer for Toolchain {
    fn install(&self, entry: &CatalogEntry) -> Result<()> {
        match &entry.strategy {
            Strategy::Native => self.native.install_package(entry.name),
            Strategy::VersionManager { version } => {
                self.versions.use_global(entry.name, version)
            }
        }
    }
}
