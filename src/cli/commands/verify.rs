//! `passcodec verify`: check a password against a stored hash.

use crate::cli::{load_settings, output, read_password, Cli};
use crate::credential::{try_check_password, Codec, StoredHash};
use crate::errors::{PassCodecError, Result};

/// Execute the `verify` command.
///
/// A mismatch is returned as `PasswordMismatch` so the process exits
/// non-zero.
pub fn execute(cli: &Cli, stored_hash: &str) -> Result<()> {
    let stored = StoredHash::new(stored_hash.trim());
    let password = read_password(false)?;

    if !try_check_password(&password, &stored)? {
        return Err(PassCodecError::PasswordMismatch);
    }

    output::success("Password matches.");

    // Only advise on rehashing when the current settings are usable.
    match load_settings(cli).and_then(|s| Codec::new(s.password_config()?)) {
        Ok(codec) if codec.needs_rehash(&stored) => {
            output::tip(&format!(
                "Stored hash predates the current settings ({}); rehash on next login.",
                codec.config().algorithm
            ));
        }
        Ok(_) => {}
        Err(e) => output::warning(&format!("Could not check for rehash: {e}")),
    }

    Ok(())
}
