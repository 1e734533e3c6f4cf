use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sealkit::cli::{
    handle_config, handle_decrypt, handle_encrypt, handle_hash, handle_init, handle_inspect,
    handle_token, DecryptArgs, EncryptArgs, HashArgs, InitArgs, InspectArgs, TokenArgs,
};
use sealkit::config::{OutputFormat, SealkitPaths, Settings};

#[derive(Parser)]
#[command(
    name = "sealkit",
    author = "Kaylee Beyene",
    version,
    about = "Password-based encryption, random tokens and SHA-256 fingerprints",
    long_about = "sealkit seals sensitive values with AES-256-GCM under a key derived \
                  from a password (PBKDF2-HMAC-SHA512, 100000 iterations). Each package \
                  is a single base64 string that needs only the password to open."
)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text under a password
    #[command(alias = "seal")]
    Encrypt(EncryptArgs),

    /// Decrypt a package
    #[command(alias = "open")]
    Decrypt(DecryptArgs),

    /// Show a package's layout without decrypting it
    Inspect(InspectArgs),

    /// Generate a random hex token
    Token(TokenArgs),

    /// Print the SHA-256 digest of text
    Hash(HashArgs),

    /// Write the default settings file
    Init(InitArgs),

    /// Show current configuration and paths
    Config,
}

impl Commands {
    /// Commands whose behaviour depends on values from the settings file
    fn needs_settings(&self) -> bool {
        matches!(self, Commands::Encrypt(_) | Commands::Token(_))
    }
}

fn init_logging(settings: &Settings, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(&settings.log_filter)
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SealkitPaths::new()?;
    let needs_settings = cli.command.as_ref().is_some_and(Commands::needs_settings);

    // A broken settings file must not block `init --force` from replacing it
    let (settings, load_error) = match Settings::load_or_create(&paths) {
        Ok(settings) => (settings, None),
        Err(e) if !needs_settings => (Settings::default(), Some(e)),
        Err(e) => return Err(e.into()),
    };
    init_logging(&settings, cli.verbose);

    if let Some(err) = load_error {
        tracing::warn!(error = %err, "using default settings");
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        settings.output_format
    };

    let output = match cli.command {
        Some(Commands::Encrypt(args)) => handle_encrypt(args, &settings)?,
        Some(Commands::Decrypt(args)) => handle_decrypt(args)?,
        Some(Commands::Inspect(args)) => handle_inspect(args)?,
        Some(Commands::Token(args)) => handle_token(args, &settings)?,
        Some(Commands::Hash(args)) => handle_hash(args)?,
        Some(Commands::Init(args)) => handle_init(args, &paths)?,
        Some(Commands::Config) => handle_config(&paths, &settings)?,
        None => {
            println!("sealkit - password-based sealing of sensitive values");
            println!();
            println!("Run 'sealkit --help' for usage information.");
            return Ok(());
        }
    };

    println!("{}", output.render(format));
    Ok(())
}
