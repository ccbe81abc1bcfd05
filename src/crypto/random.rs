//! Salt generation and constant-time comparison shared by the hashers.

use rand::rngs::OsRng;
use rand::TryRngCore;
use subtle::ConstantTimeEq;

use crate::errors::{PassCodecError, Result};

/// Generate `size` cryptographically random bytes for use as a salt.
///
/// Draws from the operating system's CSPRNG, which is safe to call from
/// any number of threads at once.  A failing RNG is a primitive failure,
/// never a reason to continue with a weaker salt.
pub fn generate_salt(size: usize) -> Result<Vec<u8>> {
    if size == 0 {
        return Err(PassCodecError::InvalidConfig(
            "salt size must be at least 1 byte".into(),
        ));
    }

    let mut salt = vec![0u8; size];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| PassCodecError::PrimitiveFailure(format!("OS random source: {e}")))?;
    Ok(salt)
}

/// Compare two byte strings without an early exit on the first mismatch.
///
/// Slices of different length compare unequal; the length itself is not
/// secret for fixed-size digests.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_has_requested_length() {
        assert_eq!(generate_salt(6).unwrap().len(), 6);
        assert_eq!(generate_salt(32).unwrap().len(), 32);
    }

    #[test]
    fn salts_differ_between_calls() {
        let a = generate_salt(16).unwrap();
        let b = generate_salt(16).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn zero_length_salt_is_rejected() {
        let err = generate_salt(0).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn constant_time_eq_matches_equality() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }
}
