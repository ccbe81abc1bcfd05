//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::credential::PasswordConfig;
use crate::errors::{PassCodecError, Result};

/// passcodec CLI: hash and verify passwords with self-describing stored hashes.
#[derive(Parser)]
#[command(
    name = "passcodec",
    about = "Multi-algorithm password hashing tool",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing .passcodec.toml (default: current directory)
    #[arg(long, global = true)]
    pub config_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Hash a password with the configured algorithm
    Hash {
        /// Algorithm tag (bcrypt, pbkdf2-sha256, pbkdf2-sha384, pbkdf2-sha512)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// PBKDF2 iteration count
        #[arg(long)]
        iterations: Option<u32>,

        /// PBKDF2 salt size in bytes
        #[arg(long)]
        salt_size: Option<usize>,

        /// bcrypt cost factor
        #[arg(long)]
        cost: Option<u32>,
    },

    /// Check a password against a stored hash
    Verify {
        /// The stored hash to check against
        stored_hash: String,
    },

    /// Show the algorithm and parameters embedded in a stored hash
    Inspect {
        /// The stored hash to inspect
        stored_hash: String,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported algorithms
    Algorithms,

    /// Show version
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Overrides for the configured work factors, taken from `hash` flags.
#[derive(Debug, Default, Clone)]
pub struct HashOverrides {
    pub algorithm: Option<String>,
    pub iterations: Option<u32>,
    pub salt_size: Option<usize>,
    pub cost: Option<u32>,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the directory holding `.passcodec.toml`.
pub fn config_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.config_dir {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(std::env::current_dir()?),
    }
}

/// Load settings from the config directory and environment.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    Settings::load(&config_dir(cli)?)
}

/// Build the effective password config: settings first, then flags.
pub fn password_config(cli: &Cli, overrides: &HashOverrides) -> Result<PasswordConfig> {
    let mut settings = load_settings(cli)?;

    if let Some(alg) = &overrides.algorithm {
        settings.password_algorithm = alg.clone();
    }
    if let Some(n) = overrides.iterations {
        settings.password_iterations = n;
    }
    if let Some(n) = overrides.salt_size {
        settings.password_salt_size = n;
    }
    if let Some(n) = overrides.cost {
        settings.password_cost = n;
    }

    settings.password_config()
}

/// Get the password to hash or check, trying in order:
/// 1. `PASSCODEC_PASSWORD` env var (scripts/CI)
/// 2. Piped stdin (first line)
/// 3. Interactive prompt, with confirmation when `confirm` is set
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn read_password(confirm: bool) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSCODEC_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        let line = buf.lines().next().unwrap_or_default();
        return Ok(Zeroizing::new(line.to_string()));
    }

    let prompt = dialoguer::Password::new().with_prompt("Password");
    let prompt = if confirm {
        prompt.with_confirmation("Confirm password", "Passwords do not match, try again")
    } else {
        prompt
    };
    let pw = prompt
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PassCodecError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}
