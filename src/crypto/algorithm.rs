//! The closed set of supported password hashing algorithms.
//!
//! Every stored hash starts with one of these tags.  Adding or removing
//! an algorithm is a change to the `Algorithm` enum; every dispatch site
//! matches on it exhaustively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PassCodecError;

/// The HMAC hash function wrapped by a PBKDF2 variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pbkdf2Digest {
    Sha256,
    Sha384,
    Sha512,
}

impl Pbkdf2Digest {
    /// Native output length of the hash function in bytes.
    /// The derived key is always exactly this long.
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

/// A supported password hashing algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    Bcrypt,
    Pbkdf2(Pbkdf2Digest),
}

impl Algorithm {
    /// Every supported algorithm, in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bcrypt,
        Algorithm::Pbkdf2(Pbkdf2Digest::Sha256),
        Algorithm::Pbkdf2(Pbkdf2Digest::Sha384),
        Algorithm::Pbkdf2(Pbkdf2Digest::Sha512),
    ];

    /// The tag written at the start of every stored hash.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Bcrypt => "bcrypt",
            Self::Pbkdf2(Pbkdf2Digest::Sha256) => "pbkdf2-sha256",
            Self::Pbkdf2(Pbkdf2Digest::Sha384) => "pbkdf2-sha384",
            Self::Pbkdf2(Pbkdf2Digest::Sha512) => "pbkdf2-sha512",
        }
    }

    /// Short human description used by `passcodec algorithms`.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bcrypt => "bcrypt ($2b$), cost factor 4-31",
            Self::Pbkdf2(Pbkdf2Digest::Sha256) => "PBKDF2-HMAC-SHA256, 32-byte key",
            Self::Pbkdf2(Pbkdf2Digest::Sha384) => "PBKDF2-HMAC-SHA384, 48-byte key",
            Self::Pbkdf2(Pbkdf2Digest::Sha512) => "PBKDF2-HMAC-SHA512, 64-byte key",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = PassCodecError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.tag() == tag)
            .ok_or_else(|| PassCodecError::UnsupportedAlgorithm(tag.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = PassCodecError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<Algorithm> for String {
    fn from(alg: Algorithm) -> Self {
        alg.tag().to_string()
    }
}

/// Returns true iff `tag` names one of the supported algorithms.
///
/// Matching is exact and case-sensitive.
pub fn is_supported(tag: &str) -> bool {
    tag.parse::<Algorithm>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_tags() {
        assert!(is_supported("bcrypt"));
        assert!(is_supported("pbkdf2-sha256"));
        assert!(is_supported("pbkdf2-sha384"));
        assert!(is_supported("pbkdf2-sha512"));
    }

    #[test]
    fn unsupported_tags() {
        assert!(!is_supported("md5"));
        assert!(!is_supported(""));
        assert!(!is_supported("BCRYPT"));
        assert!(!is_supported("pbkdf2-sha1"));
        assert!(!is_supported("pbkdf2"));
        assert!(!is_supported(" bcrypt"));
    }

    #[test]
    fn tag_round_trips_through_from_str() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.tag().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn unknown_tag_is_unsupported_algorithm_error() {
        let err = "md5".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, PassCodecError::UnsupportedAlgorithm(ref t) if t == "md5"));
    }

    #[test]
    fn digest_lengths_match_hash_functions() {
        assert_eq!(Pbkdf2Digest::Sha256.output_len(), 32);
        assert_eq!(Pbkdf2Digest::Sha384.output_len(), 48);
        assert_eq!(Pbkdf2Digest::Sha512.output_len(), 64);
    }

    #[test]
    fn serializes_as_tag_string() {
        let json = serde_json::to_string(&Algorithm::Pbkdf2(Pbkdf2Digest::Sha384)).unwrap();
        assert_eq!(json, "\"pbkdf2-sha384\"");

        let alg: Algorithm = serde_json::from_str("\"bcrypt\"").unwrap();
        assert_eq!(alg, Algorithm::Bcrypt);

        assert!(serde_json::from_str::<Algorithm>("\"md5\"").is_err());
    }
}
