//! Shortcut file loading.
//!
//! A shortcut file is a YAML document listing shortcuts by id:
//!
//! ```yaml
//! platform: macos
//! shortcuts:
//!   - id: 1
//!     key: ctrl+shift+a
//!   - id: 2
//!     key: mediaplaypause
//! ```

use crate::error::ConfigError;
use crate::types::{Platform, ShortcutOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A single shortcut entry of a shortcut file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutEntry {
    /// Identifier of the shortcut handle
    pub id: u64,
    /// Shortcut string, e.g. "ctrl+shift+a"
    #[serde(default)]
    pub key: String,
}

impl ShortcutEntry {
    /// Option map equivalent of this entry.
    pub fn options(&self) -> ShortcutOptions {
        ShortcutOptions::new(self.key.clone())
    }
}

/// Contents of a shortcut file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    /// Platform override; the build target's platform when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Shortcuts to register
    pub shortcuts: Vec<ShortcutEntry>,
}

impl ShortcutConfig {
    /// Parse a shortcut file from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: ShortcutConfig = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a shortcut file from the given path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("Loading shortcut file: {:?}", path);
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        log::info!(
            "Loaded {} shortcuts from {:?}",
            config.shortcuts.len(),
            path
        );
        Ok(config)
    }

    /// Load the shortcut file from its default location.
    ///
    /// A missing file yields an empty configuration.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            log::info!("No shortcut file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Default shortcut file path: `<config dir>/shortcut-bridge/shortcuts.yaml`.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("shortcut-bridge").join("shortcuts.yaml"))
            .unwrap_or_else(|| PathBuf::from("shortcuts.yaml"))
    }

    /// Platform the shortcuts of this file are interpreted for.
    pub fn effective_platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.shortcuts {
            if !seen.insert(entry.id) {
                return Err(ConfigError::Validation(format!(
                    "duplicate shortcut id {}",
                    entry.id
                )));
            }
        }
        Ok(())
    }
}
