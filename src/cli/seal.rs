//! Encrypt, decrypt and inspect commands

use clap::Args;

use super::input::{read_value, PasswordArgs};
use super::output::CommandOutput;
use crate::config::settings::Settings;
use crate::crypto::{decrypt, encrypt, EncryptedPackage};
use crate::error::SealResult;

/// Arguments for `sealkit encrypt`
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Text to encrypt (reads stdin when omitted or "-")
    pub text: Option<String>,

    #[command(flatten)]
    pub password: PasswordArgs,
}

/// Arguments for `sealkit decrypt`
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Encoded package (reads stdin when omitted or "-")
    pub package: Option<String>,

    #[command(flatten)]
    pub password: PasswordArgs,
}

/// Arguments for `sealkit inspect`
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Encoded package (reads stdin when omitted or "-")
    pub package: Option<String>,
}

/// Encrypt text under a password
pub fn handle_encrypt(args: EncryptArgs, settings: &Settings) -> SealResult<CommandOutput> {
    let plaintext = read_value(args.text)?;
    let password = args.password.resolve(settings.confirm_password)?;

    let package = encrypt(&plaintext, &password)?;
    Ok(CommandOutput::new(package.clone()).field("package", package))
}

/// Decrypt a package with its password
pub fn handle_decrypt(args: DecryptArgs) -> SealResult<CommandOutput> {
    let package = read_value(args.package)?;
    let package = package.trim();
    let password = args.password.resolve(false)?;

    let plaintext = decrypt(package, &password)?;
    Ok(CommandOutput::new(plaintext.clone()).field("plaintext", plaintext))
}

/// Show a package's layout without decrypting it
pub fn handle_inspect(args: InspectArgs) -> SealResult<CommandOutput> {
    let encoded = read_value(args.package)?;
    let package = EncryptedPackage::decode(encoded.trim())?;

    let text = format!(
        "salt:       {} bytes\niv:         {} bytes\ntag:        {} bytes\nciphertext: {} bytes",
        package.salt().len(),
        package.iv().len(),
        package.tag().len(),
        package.ciphertext().len(),
    );

    Ok(CommandOutput::new(text)
        .field("salt_len", package.salt().len())
        .field("iv_len", package.iv().len())
        .field("tag_len", package.tag().len())
        .field("ciphertext_len", package.ciphertext().len())
        .field("plaintext_len", package.plaintext_len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SealError;

    fn password(pw: &str) -> PasswordArgs {
        PasswordArgs {
            password_env: None,
            password: Some(pw.to_string()),
        }
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let settings = Settings::default();
        let sealed = handle_encrypt(
            EncryptArgs {
                text: Some("hello world".into()),
                password: password("correct-password"),
            },
            &settings,
        )
        .unwrap();

        let opened = handle_decrypt(DecryptArgs {
            package: Some(sealed.text().to_string()),
            password: password("correct-password"),
        })
        .unwrap();
        assert_eq!(opened.text(), "hello world");
    }

    #[test]
    fn test_decrypt_wrong_password() {
        let package = encrypt("hello world", "correct-password").unwrap();
        let err = handle_decrypt(DecryptArgs {
            package: Some(package),
            password: password("wrong-password"),
        })
        .unwrap_err();
        assert!(matches!(err, SealError::Authentication));
    }

    #[test]
    fn test_inspect_reports_lengths() {
        let package = encrypt("hello world", "pw").unwrap();
        let out = handle_inspect(InspectArgs {
            package: Some(format!("{}\n", package)),
        })
        .unwrap();
        assert!(out.text().contains("ciphertext: 11 bytes"));
        assert!(out.text().contains("salt:       64 bytes"));
    }

    #[test]
    fn test_inspect_rejects_short_package() {
        let err = handle_inspect(InspectArgs {
            package: Some("AAAA".into()),
        })
        .unwrap_err();
        assert!(err.is_decoding());
    }
}
