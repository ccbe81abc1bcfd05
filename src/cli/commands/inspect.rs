//! `passcodec inspect`: show the parameters embedded in a stored hash.

use crate::cli::{output, Cli};
use crate::credential::StoredHash;
use crate::errors::{PassCodecError, Result};

/// Execute the `inspect` command.
pub fn execute(_cli: &Cli, stored_hash: &str, json: bool) -> Result<()> {
    let stored = StoredHash::new(stored_hash.trim());
    let params = stored.describe()?;

    if json {
        let rendered = serde_json::to_string_pretty(&params)
            .map_err(|e| PassCodecError::CommandFailed(format!("JSON output: {e}")))?;
        println!("{rendered}");
    } else {
        output::print_params_table(&params);
    }

    Ok(())
}
