//! The self-describing stored hash string.
//!
//! Two encodings share the type:
//!
//! ```text
//! bcrypt$2b$10$<22 salt chars><31 digest chars>     tag glued to the bcrypt payload
//! pbkdf2-sha256$12000$<hex salt>$<hex derived key>  four `$`-delimited fields
//! ```
//!
//! The value is never edited in place; a password change yields a new one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::crypto::algorithm::{Algorithm, Pbkdf2Digest};
use crate::crypto::bcrypt_hasher::{self, BCRYPT_TAG};
use crate::crypto::pbkdf2_hasher::{Pbkdf2Hash, SEPARATOR};
use crate::errors::{PassCodecError, Result};

/// An opaque, immutable stored hash.
///
/// Serializes as the bare string so persistence layers can store it in
/// a plain text column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredHash(String);

/// Work-factor parameters embedded in a stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum HashParams {
    Bcrypt {
        cost: u32,
    },
    Pbkdf2 {
        digest: Pbkdf2Digest,
        iterations: u32,
        salt_len: usize,
    },
}

impl HashParams {
    /// The algorithm these parameters belong to.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bcrypt { .. } => Algorithm::Bcrypt,
            Self::Pbkdf2 { digest, .. } => Algorithm::Pbkdf2(*digest),
        }
    }
}

impl StoredHash {
    /// Wrap a string read back from storage.  No validation happens
    /// here: an invalid value simply never verifies.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Identify the algorithm from the leading tag.
    ///
    /// The bcrypt tag has no separator after it, so it is tried first;
    /// otherwise the first `$`-delimited field is the tag.  Returns
    /// `None` for anything outside the supported set.
    pub fn algorithm(&self) -> Option<Algorithm> {
        extract_algorithm(&self.0)
    }

    /// Read the embedded parameters, or `None` if the value is malformed.
    pub fn params(&self) -> Option<HashParams> {
        match self.algorithm()? {
            Algorithm::Bcrypt => {
                bcrypt_hasher::parse_cost(&self.0).map(|cost| HashParams::Bcrypt { cost })
            }
            Algorithm::Pbkdf2(_) => Pbkdf2Hash::parse(&self.0).map(|parsed| HashParams::Pbkdf2 {
                digest: parsed.digest,
                iterations: parsed.iterations,
                salt_len: parsed.salt.len(),
            }),
        }
    }

    /// Like `params`, but explains what is wrong.  Used for inspection,
    /// never on the verification path.
    pub fn describe(&self) -> Result<HashParams> {
        if self.algorithm().is_none() {
            let tag = self.0.split(SEPARATOR).next().unwrap_or_default();
            return Err(PassCodecError::MalformedHash(format!(
                "unsupported algorithm tag '{tag}'"
            )));
        }
        self.params().ok_or_else(|| {
            PassCodecError::MalformedHash("parameters or digest could not be parsed".into())
        })
    }
}

/// Tag extraction shared by `StoredHash` and plain-string callers.
pub(crate) fn extract_algorithm(stored: &str) -> Option<Algorithm> {
    if stored.starts_with(BCRYPT_TAG) {
        return Some(Algorithm::Bcrypt);
    }
    let tag = stored.split(SEPARATOR).next()?;
    match tag.parse::<Algorithm>().ok()? {
        Algorithm::Bcrypt => None,
        pbkdf2 @ Algorithm::Pbkdf2(_) => Some(pbkdf2),
    }
}

impl fmt::Display for StoredHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StoredHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for StoredHash {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StoredHash {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
