//! User settings for sealkit
//!
//! Preferences for the command-line layer. Nothing cryptographic is
//! configurable: algorithms, salt/IV sizes and the KDF iteration count are
//! fixed by the package format.

use serde::{Deserialize, Serialize};

use super::paths::SealkitPaths;
use crate::crypto::DEFAULT_TOKEN_LENGTH;
use crate::error::SealError;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare values, one per line
    #[default]
    Text,
    /// A JSON object per command
    Json,
}

/// User settings for sealkit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Token length in bytes when `--length` is not given
    #[serde(default = "default_token_length")]
    pub token_length: usize,

    /// Default output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Ask for the password twice when encrypting interactively
    #[serde(default = "default_confirm_password")]
    pub confirm_password: bool,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_token_length() -> usize {
    DEFAULT_TOKEN_LENGTH
}

fn default_confirm_password() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            token_length: default_token_length(),
            output_format: OutputFormat::default(),
            confirm_password: default_confirm_password(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SealkitPaths) -> Result<Self, SealError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SealError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SealError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SealkitPaths) -> Result<(), SealError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SealError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SealError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    fn validate(&self) -> Result<(), SealError> {
        if self.token_length == 0 {
            return Err(SealError::Config(
                "token_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_paths() -> (TempDir, SealkitPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealkitPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.token_length, 32);
        assert_eq!(settings.output_format, OutputFormat::Text);
        assert!(settings.confirm_password);
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_dir, paths) = temp_paths();
        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.token_length, DEFAULT_TOKEN_LENGTH);
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let (_dir, paths) = temp_paths();

        let mut settings = Settings::default();
        settings.token_length = 16;
        settings.output_format = OutputFormat::Json;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.token_length, 16);
        assert_eq!(loaded.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let (_dir, paths) = temp_paths();
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"output_format": "json"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.output_format, OutputFormat::Json);
        assert_eq!(loaded.token_length, 32);
        assert!(loaded.confirm_password);
    }

    #[test]
    fn test_zero_token_length_rejected() {
        let (_dir, paths) = temp_paths();
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"token_length": 0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SealError::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let (_dir, paths) = temp_paths();
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SealError::Config(_)));
    }
}
