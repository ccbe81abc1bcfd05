//! `passcodec hash`: encode a password into a new stored hash.

use crate::cli::{output, password_config, read_password, Cli, HashOverrides};
use crate::credential::set_password;
use crate::errors::Result;

/// Execute the `hash` command.
pub fn execute(cli: &Cli, overrides: &HashOverrides) -> Result<()> {
    // Configuration is validated before the password is read.
    let config = password_config(cli, overrides)?;
    let password = read_password(true)?;

    let stored = set_password(&password, &config)?;

    // The stored hash alone goes to stdout so it can be captured.
    println!("{stored}");
    if password.is_empty() {
        output::warning("Hashed an empty password.");
    }

    Ok(())
}
