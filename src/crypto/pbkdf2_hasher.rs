//! PBKDF2-HMAC stored hashes.
//!
//! Layout: four `$`-delimited fields.
//!
//! ```text
//! <tag>$<iterations>$<salt hex>$<derived key hex>
//! pbkdf2-sha256$12000$a1b2c3d4e5f6$9f86d081884c7d65...
//! ```
//!
//! The derived key is always the digest's native length (32, 48 or 64
//! bytes) and is written as lowercase hex.
//!
//! Verification compares only the derived-key field, in constant time.

use hmac::Hmac;
use sha2::{Sha256, Sha384, Sha512};

use super::algorithm::{Algorithm, Pbkdf2Digest};
use super::random::constant_time_eq;
use crate::errors::{PassCodecError, Result};

/// Field separator inside a PBKDF2 stored hash.
pub const SEPARATOR: char = '$';

/// A PBKDF2 stored hash split into its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pbkdf2Hash {
    pub digest: Pbkdf2Digest,
    pub iterations: u32,
    pub salt: Vec<u8>,
    pub key: Vec<u8>,
}

impl Pbkdf2Hash {
    /// Parse a stored hash.  Returns `None` on wrong field count, an
    /// unknown tag, a non-numeric or zero iteration count, an empty or
    /// non-hex salt, or a key that is not valid hex of the right length.
    pub fn parse(stored: &str) -> Option<Self> {
        let fields: Vec<&str> = stored.split(SEPARATOR).collect();
        let [tag, iterations, salt, key] = fields.as_slice() else {
            return None;
        };

        let digest = match tag.parse::<Algorithm>().ok()? {
            Algorithm::Pbkdf2(digest) => digest,
            Algorithm::Bcrypt => return None,
        };

        if !iterations.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let iterations: u32 = iterations.parse().ok()?;
        if iterations == 0 {
            return None;
        }

        let salt = hex::decode(salt).ok()?;
        if salt.is_empty() {
            return None;
        }

        let key = hex::decode(key).ok()?;
        if key.len() != digest.output_len() {
            return None;
        }

        Some(Self {
            digest,
            iterations,
            salt,
            key,
        })
    }
}

/// Derive a key of the digest's native length.
pub fn derive_key(
    password: &[u8],
    digest: Pbkdf2Digest,
    iterations: u32,
    salt: &[u8],
) -> Result<Vec<u8>> {
    let mut key = vec![0u8; digest.output_len()];
    let outcome = match digest {
        Pbkdf2Digest::Sha256 => {
            pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut key)
        }
        Pbkdf2Digest::Sha384 => {
            pbkdf2::pbkdf2::<Hmac<Sha384>>(password, salt, iterations, &mut key)
        }
        Pbkdf2Digest::Sha512 => {
            pbkdf2::pbkdf2::<Hmac<Sha512>>(password, salt, iterations, &mut key)
        }
    };
    outcome.map_err(|e| {
        PassCodecError::PrimitiveFailure(format!("PBKDF2 derivation failed: {e}"))
    })?;
    Ok(key)
}

/// Hash `password` with PBKDF2 and format the stored hash.
///
/// `iterations` must be positive and `salt` non-empty; either mistake is
/// a configuration error and produces no output.
pub fn encode_pbkdf2(
    password: &str,
    digest: Pbkdf2Digest,
    iterations: u32,
    salt: &[u8],
) -> Result<String> {
    if iterations == 0 {
        return Err(PassCodecError::InvalidConfig(
            "PBKDF2 iterations must be at least 1".into(),
        ));
    }
    if salt.is_empty() {
        return Err(PassCodecError::InvalidConfig(
            "PBKDF2 salt must not be empty".into(),
        ));
    }

    let key = derive_key(password.as_bytes(), digest, iterations, salt)?;

    Ok(format!(
        "{tag}{SEPARATOR}{iterations}{SEPARATOR}{salt}{SEPARATOR}{key}",
        tag = Algorithm::Pbkdf2(digest).tag(),
        salt = hex::encode(salt),
        key = hex::encode(key),
    ))
}

/// Check `password` against a PBKDF2 stored hash, keeping primitive
/// failures distinct from a mismatch.
///
/// Any parse failure is `Ok(false)`.  Only a failure of the derivation
/// itself is an `Err`.
pub fn try_verify_pbkdf2(password: &str, stored: &str) -> Result<bool> {
    let Some(parsed) = Pbkdf2Hash::parse(stored) else {
        log::debug!("pbkdf2 verify: malformed stored hash");
        return Ok(false);
    };

    let candidate = derive_key(
        password.as_bytes(),
        parsed.digest,
        parsed.iterations,
        &parsed.salt,
    )?;
    Ok(constant_time_eq(&candidate, &parsed.key))
}

/// Check `password` against a PBKDF2 stored hash.
///
/// A primitive failure is logged at error level and reported as no
/// match; use `try_verify_pbkdf2` to tell the two apart.
pub fn verify_pbkdf2(password: &str, stored: &str) -> bool {
    try_verify_pbkdf2(password, stored).unwrap_or_else(|e| {
        log::error!("pbkdf2 verify: {e}");
        false
    })
}
