//! Persisted viewer preferences (currently only the theme).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DossierError, DossierResult};
use crate::types::Theme;

/// Directory name under the platform config dir
pub const APP_DIR: &str = "dinner-dossier";

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

impl Preferences {
    /// `<config_dir>/dinner-dossier/preferences.json`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(PREFERENCES_FILE))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> DossierResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(DossierError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable preferences at {:?}: {}", path, e);
            Self::default()
        })
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> DossierResult<()> {
        let io_err = |source| DossierError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(io_err)?;
        tracing::debug!("Saved preferences to {:?}", path);
        Ok(())
    }
}
