//! Encoding new passwords and checking candidates against stored hashes.
//!
//! `Codec` is built once from a validated `PasswordConfig` and then used
//! for every password operation, so the hashing code never reads ambient
//! configuration.  Verification picks the algorithm from the stored hash,
//! not from the configuration, which keeps old credentials verifiable
//! after the default algorithm or work factor changes.

use crate::crypto::algorithm::Algorithm;
use crate::crypto::bcrypt_hasher::{self, encode_bcrypt, verify_bcrypt};
use crate::crypto::pbkdf2_hasher::{encode_pbkdf2, try_verify_pbkdf2};
use crate::crypto::random::generate_salt;
use crate::errors::{PassCodecError, Result};

use super::stored_hash::{extract_algorithm, HashParams, StoredHash};

/// Algorithm and work factors used for newly encoded passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    /// Algorithm for new stored hashes (default: pbkdf2-sha256).
    pub algorithm: Algorithm,
    /// PBKDF2 iteration count (default: 12 000).
    pub iterations: u32,
    /// PBKDF2 salt length in bytes (default: 6).
    pub salt_size: usize,
    /// bcrypt cost factor (default: 10).
    pub cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Pbkdf2(crate::crypto::Pbkdf2Digest::Sha256),
            iterations: 12_000,
            salt_size: 6,
            cost: 10,
        }
    }
}

impl PasswordConfig {
    /// Default work factors with the algorithm named by `tag`.
    ///
    /// An unknown tag is a configuration error; there is no fallback.
    pub fn for_algorithm(tag: &str) -> Result<Self> {
        let algorithm = tag.parse::<Algorithm>().inspect_err(|_| {
            log::warn!("refusing unsupported password algorithm '{tag}'");
        })?;
        Ok(Self {
            algorithm,
            ..Self::default()
        })
    }

    /// Check the work factors the selected algorithm will use.
    pub fn validate(&self) -> Result<()> {
        match self.algorithm {
            Algorithm::Bcrypt => bcrypt_hasher::validate_cost(self.cost),
            Algorithm::Pbkdf2(_) => {
                if self.iterations == 0 {
                    return Err(PassCodecError::InvalidConfig(
                        "PBKDF2 iterations must be at least 1".into(),
                    ));
                }
                if self.salt_size == 0 {
                    return Err(PassCodecError::InvalidConfig(
                        "PBKDF2 salt size must be at least 1 byte".into(),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// The password entry point for the rest of an application.
///
/// Cheap to clone and safe to share between threads; every method is a
/// pure function of its arguments and the injected configuration.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    config: PasswordConfig,
}

impl Codec {
    /// Validate `config` and build a codec around it.
    pub fn new(config: PasswordConfig) -> Result<Self> {
        config.validate().inspect_err(|e| {
            log::warn!("rejecting password configuration: {e}");
        })?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    /// Encode `password` under the configured algorithm with a fresh salt.
    pub fn set_password(&self, password: &str) -> Result<StoredHash> {
        encode(password, &self.config)
    }

    /// Check `password` against `stored`.  Never fails: unknown tags and
    /// malformed values are "does not match".
    pub fn check_password(&self, password: &str, stored: &StoredHash) -> bool {
        check_password(password, stored)
    }

    /// True when `stored` was not produced under the current algorithm
    /// and work factors, so it should be re-encoded after the next
    /// successful check.  Malformed values always need rehashing.
    pub fn needs_rehash(&self, stored: &StoredHash) -> bool {
        let Some(params) = stored.params() else {
            return true;
        };
        if params.algorithm() != self.config.algorithm {
            return true;
        }
        match params {
            HashParams::Bcrypt { cost } => cost != self.config.cost,
            HashParams::Pbkdf2 {
                iterations,
                salt_len,
                ..
            } => iterations != self.config.iterations || salt_len != self.config.salt_size,
        }
    }
}

/// Validate `config` and encode `password` under it.
///
/// Produces no stored hash on any failure: an unsupported algorithm or
/// out-of-range work factor is a configuration error, a failing RNG or
/// hashing primitive is a primitive error.
pub fn set_password(password: &str, config: &PasswordConfig) -> Result<StoredHash> {
    config.validate()?;
    encode(password, config)
}

fn encode(password: &str, config: &PasswordConfig) -> Result<StoredHash> {
    log::debug!("encoding password with {}", config.algorithm);
    let encoded = match config.algorithm {
        Algorithm::Bcrypt => encode_bcrypt(password, config.cost)?,
        Algorithm::Pbkdf2(digest) => {
            let salt = generate_salt(config.salt_size)?;
            encode_pbkdf2(password, digest, config.iterations, &salt)?
        }
    };
    Ok(StoredHash::new(encoded))
}

/// Check `password` against `stored`, reporting primitive failures as
/// errors instead of folding them into "does not match".
pub fn try_check_password(password: &str, stored: &StoredHash) -> Result<bool> {
    let Some(algorithm) = extract_algorithm(stored.as_str()) else {
        log::debug!("stored hash has an unsupported algorithm tag");
        return Ok(false);
    };

    match algorithm {
        Algorithm::Bcrypt => Ok(verify_bcrypt(password, stored.as_str())),
        Algorithm::Pbkdf2(_) => try_verify_pbkdf2(password, stored.as_str()),
    }
}

/// Check `password` against `stored`.
///
/// Returns false for unknown tags, malformed values, and wrong
/// passwords.  A primitive failure is logged at error level.
pub fn check_password(password: &str, stored: &StoredHash) -> bool {
    try_check_password(password, stored).unwrap_or_else(|e| {
        log::error!("password check aborted: {e}");
        false
    })
}
