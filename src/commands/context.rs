//! Shared setup for every command that touches a source or a platform

use std::path::PathBuf;

use tracing::debug;

use crate::config::{self, SourceLayout};
use crate::error::{Result, SkillsetError};
use crate::installer::Installer;
use crate::platform::{PlatformLoader, PlatformRegistry};

/// Global options as parsed from the command line
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub source: Option<PathBuf>,
    pub home: Option<PathBuf>,
    pub platform: String,
}

/// Resolved source layout, platform registry and active installer
pub struct CommandContext {
    pub registry: PlatformRegistry,
    pub installer: Installer,
}

impl CommandContext {
    pub fn open(options: &GlobalOptions) -> Result<Self> {
        let layout = SourceLayout::resolve(options.source.clone())?;
        let home = config::resolve_home(options.home.clone())?;

        let platforms = PlatformLoader::new(layout.root()).load()?;
        let registry = PlatformRegistry::new(platforms);
        let platform = registry.get_by_id(&options.platform)?.clone();
        debug!(
            source = %layout.root().display(),
            home = %home.display(),
            platform = %platform.id,
            "command context"
        );

        let installer = Installer::new(layout, platform, home);
        Ok(Self {
            registry,
            installer,
        })
    }

    /// Fail unless the source root exists
    pub fn require_source(&self) -> Result<()> {
        let root = self.installer.layout().root();
        if root.is_dir() {
            Ok(())
        } else {
            Err(SkillsetError::SourceNotFound {
                path: root.display().to_string(),
            })
        }
    }
}
