//! Init and config commands

use clap::Args;

use super::output::CommandOutput;
use crate::config::{paths::SealkitPaths, settings::Settings};
use crate::crypto::PBKDF2_ITERATIONS;
use crate::error::{SealError, SealResult};

/// Arguments for `sealkit init`
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing settings file
    #[arg(long)]
    pub force: bool,
}

/// Write the default settings file
pub fn handle_init(args: InitArgs, paths: &SealkitPaths) -> SealResult<CommandOutput> {
    if paths.is_initialized() && !args.force {
        return Err(SealError::Config(format!(
            "Settings already exist at {} (use --force to overwrite)",
            paths.settings_file().display()
        )));
    }

    Settings::default().save(paths)?;
    tracing::info!(path = %paths.settings_file().display(), "wrote default settings");

    let path = paths.settings_file().display().to_string();
    Ok(CommandOutput::new(format!("Wrote default settings to {}", path)).field("settings_file", path))
}

/// Show paths and effective settings
pub fn handle_config(paths: &SealkitPaths, settings: &Settings) -> SealResult<CommandOutput> {
    let mut text = String::new();
    text.push_str("sealkit Configuration\n");
    text.push_str("=====================\n");
    text.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    text.push_str(&format!("Settings file:    {}\n", paths.settings_file().display()));
    text.push('\n');
    text.push_str("Settings:\n");
    text.push_str(&format!("  Token length:     {} bytes\n", settings.token_length));
    text.push_str(&format!("  Output format:    {:?}\n", settings.output_format));
    text.push_str(&format!("  Confirm password: {}\n", settings.confirm_password));
    text.push_str(&format!("  Log filter:       {}\n", settings.log_filter));
    text.push('\n');
    text.push_str("Algorithms (fixed):\n");
    text.push_str("  Encryption: AES-256-GCM, 16-byte IV\n");
    text.push_str(&format!(
        "  Key derivation: PBKDF2-HMAC-SHA512, {} iterations",
        PBKDF2_ITERATIONS
    ));

    let settings_json = serde_json::to_value(settings)?;
    Ok(CommandOutput::new(text)
        .field("config_dir", paths.base_dir().display().to_string())
        .field("settings", settings_json))
}
