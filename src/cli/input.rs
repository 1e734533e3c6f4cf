//! Input and password resolution for CLI commands
//!
//! Values come from a positional argument or stdin; passwords come from a
//! named environment variable, `--password`/`SEALKIT_PASSWORD`, or a hidden
//! prompt, in that order.

use std::io::Read;

use clap::Args;

use crate::crypto::SecureString;
use crate::error::{SealError, SealResult};

/// Environment variable read when no password flag is given
pub const PASSWORD_ENV: &str = "SEALKIT_PASSWORD";

/// Password source arguments shared by `encrypt` and `decrypt`
#[derive(Args, Debug, Default)]
pub struct PasswordArgs {
    /// Read the password from the named environment variable
    #[arg(long, value_name = "VAR")]
    pub password_env: Option<String>,

    /// Password for scripted use; hidden from help since it shows up in the
    /// process list. SEALKIT_PASSWORD sets the same value.
    #[arg(long, env = "SEALKIT_PASSWORD", hide = true, hide_env_values = true)]
    pub password: Option<String>,
}

impl PasswordArgs {
    /// Resolve the password without prompting, if one was supplied
    pub fn supplied(&self) -> SealResult<Option<SecureString>> {
        if let Some(var) = &self.password_env {
            let value = std::env::var(var).map_err(|_| {
                SealError::Config(format!("Password variable {} is not set", var))
            })?;
            return Ok(Some(SecureString::new(value)));
        }

        Ok(self.password.as_deref().map(SecureString::from))
    }

    /// Resolve the password, prompting on the terminal if none was supplied
    pub fn resolve(&self, confirm: bool) -> SealResult<SecureString> {
        if let Some(password) = self.supplied()? {
            return Ok(password);
        }

        if !confirm {
            return prompt_password("Password: ");
        }

        loop {
            let first = prompt_password("Password: ")?;
            let second = prompt_password("Confirm password: ")?;

            if first == second {
                return Ok(first);
            }
            eprintln!("Passwords do not match. Please try again.");
        }
    }
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> SealResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::new)
        .map_err(|e| SealError::Io(format!("Failed to read password: {}", e)))
}

/// Use the argument value, or read stdin when it is absent or `-`
pub fn read_value(arg: Option<String>) -> SealResult<String> {
    match arg {
        Some(value) if value != "-" => Ok(value),
        _ => read_from(std::io::stdin().lock()),
    }
}

/// Read all of `reader`, dropping a single trailing line ending
pub fn read_from(mut reader: impl Read) -> SealResult<String> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|e| SealError::Io(format!("Failed to read input: {}", e)))?;

    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}
