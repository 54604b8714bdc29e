//! Path management for manat-format
//!
//! ## Path Resolution Order
//!
//! 1. `MANAT_FORMAT_CONFIG_DIR` environment variable (if set)
//! 2. `$XDG_CONFIG_HOME/manat-format` (if set)
//! 3. The platform config directory (`~/.config`, `%APPDATA%`, ...)

use directories::BaseDirs;
use std::path::PathBuf;

use crate::error::FormatError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "MANAT_FORMAT_CONFIG_DIR";

const APP_DIR: &str = "manat-format";

/// Manages the paths used by manat-format
#[derive(Debug, Clone)]
pub struct FormatPaths {
    base_dir: PathBuf,
}

impl FormatPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FormatError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FormatPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FormatError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FormatError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FormatError> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join(APP_DIR))
        .ok_or_else(|| FormatError::Config("Could not determine home directory".into()))
}
