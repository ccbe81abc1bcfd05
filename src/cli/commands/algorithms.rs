//! `passcodec algorithms`: list supported algorithms.

use crate::cli::{load_settings, output, Cli};
use crate::crypto::Algorithm;
use crate::errors::Result;

/// Execute the `algorithms` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;

    let default = match settings.password_algorithm.parse::<Algorithm>() {
        Ok(alg) => Some(alg),
        Err(e) => {
            output::warning(&e.to_string());
            None
        }
    };

    output::print_algorithms_table(default);
    output::tip("Set password_algorithm in .passcodec.toml to change the default.");

    Ok(())
}
