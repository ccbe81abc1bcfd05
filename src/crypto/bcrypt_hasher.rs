//! bcrypt stored hashes.
//!
//! Layout: the literal tag `bcrypt` followed directly (no separator) by
//! the bcrypt library's own encoding, which embeds the cost and salt:
//!
//! ```text
//! bcrypt$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy
//! ```

use crate::errors::{PassCodecError, Result};

/// Literal prefix of every bcrypt stored hash.
pub const BCRYPT_TAG: &str = "bcrypt";

/// Lowest cost factor the bcrypt primitive accepts.
pub const MIN_COST: u32 = 4;

/// Highest cost factor the bcrypt primitive accepts.
pub const MAX_COST: u32 = 31;

/// Check that `cost` is inside the range bcrypt supports.
pub fn validate_cost(cost: u32) -> Result<()> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(PassCodecError::InvalidConfig(format!(
            "bcrypt cost must be between {MIN_COST} and {MAX_COST} (got {cost})"
        )));
    }
    Ok(())
}

/// Hash `password` with bcrypt at the given cost and prefix the tag.
///
/// bcrypt generates its own 16-byte salt.  Passwords longer than 72
/// bytes are truncated by the primitive.
pub fn encode_bcrypt(password: &str, cost: u32) -> Result<String> {
    validate_cost(cost)?;

    let payload = bcrypt::hash(password, cost)
        .map_err(|e| PassCodecError::PrimitiveFailure(format!("bcrypt hashing failed: {e}")))?;

    Ok(format!("{BCRYPT_TAG}{payload}"))
}

/// Check `password` against a `bcrypt`-tagged stored hash.
///
/// Returns false for a missing tag or any payload the primitive cannot
/// parse.  The comparison itself is done by the bcrypt crate in
/// constant time.
pub fn verify_bcrypt(password: &str, stored: &str) -> bool {
    let Some(payload) = strip_tag(stored) else {
        log::debug!("bcrypt verify: stored hash lacks the bcrypt tag");
        return false;
    };

    match bcrypt::verify(password, payload) {
        Ok(matched) => matched,
        Err(e) => {
            log::debug!("bcrypt verify: malformed payload ({e})");
            false
        }
    }
}

/// Read the cost factor out of a bcrypt stored hash without hashing.
///
/// The payload has the shape `$<version>$<cost>$<salt+digest>`.
pub fn parse_cost(stored: &str) -> Option<u32> {
    let payload = strip_tag(stored)?;
    let mut fields = payload.split('$');

    if !fields.next()?.is_empty() {
        return None;
    }
    let version = fields.next()?;
    if !matches!(version, "2a" | "2b" | "2x" | "2y") {
        return None;
    }
    let cost_field = fields.next()?;
    if cost_field.len() != 2 {
        return None;
    }
    let cost: u32 = cost_field.parse().ok()?;
    let rest = fields.next()?;
    if fields.next().is_some() || rest.is_empty() {
        return None;
    }

    (MIN_COST..=MAX_COST).contains(&cost).then_some(cost)
}

/// Remove the `bcrypt` tag, refusing input that is too short or
/// carries a different prefix.
fn strip_tag(stored: &str) -> Option<&str> {
    if stored.len() <= BCRYPT_TAG.len() {
        return None;
    }
    stored.strip_prefix(BCRYPT_TAG)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lowest legal cost keeps the tests fast.
    const TEST_COST: u32 = MIN_COST;

    #[test]
    fn encode_prefixes_tag_and_embeds_cost() {
        let stored = encode_bcrypt("battery staple", TEST_COST).unwrap();
        assert!(stored.starts_with("bcrypt$2b$04$"));
        assert_eq!(parse_cost(&stored), Some(TEST_COST));
    }

    #[test]
    fn verify_accepts_correct_password() {
        let stored = encode_bcrypt("battery staple", TEST_COST).unwrap();
        assert!(verify_bcrypt("battery staple", &stored));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let stored = encode_bcrypt("battery staple", TEST_COST).unwrap();
        assert!(!verify_bcrypt("battery stapler", &stored));
    }

    #[test]
    fn out_of_range_cost_is_configuration_error() {
        assert!(encode_bcrypt("pw", 3).unwrap_err().is_configuration());
        assert!(encode_bcrypt("pw", 32).unwrap_err().is_configuration());
    }

    #[test]
    fn short_or_untagged_input_does_not_match() {
        assert!(!verify_bcrypt("pw", ""));
        assert!(!verify_bcrypt("pw", "bcr"));
        assert!(!verify_bcrypt("pw", "bcrypt"));
        assert!(!verify_bcrypt("pw", "$2b$04$abcdefghijklmnopqrstuv"));
    }

    #[test]
    fn garbage_payload_does_not_match() {
        assert!(!verify_bcrypt("pw", "bcrypt$2b$04$not-a-real-hash"));
        assert!(!verify_bcrypt("pw", "bcryptgarbage"));
    }

    #[test]
    fn parse_cost_rejects_malformed_payloads() {
        assert_eq!(parse_cost("bcrypt"), None);
        assert_eq!(parse_cost("bcrypt$2b$xx$abc"), None);
        assert_eq!(parse_cost("bcrypt$9z$10$abc"), None);
        assert_eq!(parse_cost("bcrypt$2b$10$"), None);
        assert_eq!(parse_cost("bcrypt$2b$10$abc"), Some(10));
    }
}
