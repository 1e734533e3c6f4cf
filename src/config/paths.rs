//! Path management for sealkit
//!
//! ## Path Resolution Order
//!
//! 1. `SEALKIT_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/sealkit` or `~/.config/sealkit`
//! 3. Windows: `%APPDATA%\sealkit`

use std::path::{Path, PathBuf};

use crate::error::SealError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "SEALKIT_CONFIG_DIR";

/// Manages all paths used by sealkit
#[derive(Debug, Clone)]
pub struct SealkitPaths {
    base_dir: PathBuf,
}

impl SealkitPaths {
    /// Create a new SealkitPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application-data directory can be
    /// determined.
    pub fn new() -> Result<Self, SealError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SealkitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/sealkit/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_directories(&self) -> Result<(), SealError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SealError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SealError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME")
                .map_err(|_| SealError::Config("Could not determine HOME directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("sealkit"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SealError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SealError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("sealkit"))
}
