//! Credential module: stored hashes and the codec that makes them.
//!
//! This module provides:
//! - The `StoredHash` value and its tag/parameter parsing (`stored_hash`)
//! - `PasswordConfig`, `Codec`, and the encode/check entry points (`codec`)
//! - The `Credential` record that owns one stored hash (`record`)

pub mod codec;
pub mod record;
pub mod stored_hash;

// Re-export the most commonly used items.
pub use codec::{check_password, set_password, try_check_password, Codec, PasswordConfig};
pub use record::Credential;
pub use stored_hash::{HashParams, StoredHash};
