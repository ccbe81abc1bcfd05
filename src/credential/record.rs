//! A user-like record that owns exactly one stored hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::codec::Codec;
use super::stored_hash::StoredHash;
use crate::errors::Result;

/// A login credential as a persistence layer would store it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// The login name (e.g. "admin").
    pub username: String,

    /// The stored hash.  Replaced wholesale on every password change.
    password: StoredHash,

    /// When the stored hash was last replaced.
    pub password_changed_at: DateTime<Utc>,
}

impl Credential {
    /// Create a credential with a freshly encoded password.
    pub fn new(codec: &Codec, username: &str, password: &str) -> Result<Self> {
        Ok(Self {
            username: username.to_string(),
            password: codec.set_password(password)?,
            password_changed_at: Utc::now(),
        })
    }

    /// Rebuild a credential from values read back from storage.
    pub fn from_stored(
        username: impl Into<String>,
        password: StoredHash,
        password_changed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username: username.into(),
            password,
            password_changed_at,
        }
    }

    pub fn stored_hash(&self) -> &StoredHash {
        &self.password
    }

    /// Encode `password` and replace the stored hash.
    ///
    /// On error the existing stored hash is left untouched.
    pub fn set_password(&mut self, codec: &Codec, password: &str) -> Result<()> {
        let fresh = codec.set_password(password)?;
        self.password = fresh;
        self.password_changed_at = Utc::now();
        Ok(())
    }

    pub fn check_password(&self, codec: &Codec, password: &str) -> bool {
        codec.check_password(password, &self.password)
    }

    /// Check `password` and, if it matches a hash made under outdated
    /// parameters, re-encode it under the current configuration.
    ///
    /// Returns whether the password matched.  A failed re-encode is an
    /// error; the old stored hash is kept in that case.
    pub fn check_and_upgrade(&mut self, codec: &Codec, password: &str) -> Result<bool> {
        if !self.check_password(codec, password) {
            return Ok(false);
        }
        if codec.needs_rehash(&self.password) {
            log::info!("upgrading stored hash for '{}'", self.username);
            self.set_password(codec, password)?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::PasswordConfig;
    use crate::crypto::{Algorithm, Pbkdf2Digest};

    fn codec(algorithm: Algorithm) -> Codec {
        Codec::new(PasswordConfig {
            algorithm,
            iterations: 10,
            salt_size: 6,
            cost: 4,
        })
        .unwrap()
    }

    #[test]
    fn set_password_replaces_stored_hash() {
        let codec = codec(Algorithm::Pbkdf2(Pbkdf2Digest::Sha256));
        let mut cred = Credential::new(&codec, "admin", "first").unwrap();
        let before = cred.stored_hash().clone();

        cred.set_password(&codec, "second").unwrap();
        assert_ne!(cred.stored_hash(), &before);
        assert!(cred.check_password(&codec, "second"));
        assert!(!cred.check_password(&codec, "first"));
    }

    #[test]
    fn check_and_upgrade_migrates_old_algorithm() {
        let old = codec(Algorithm::Pbkdf2(Pbkdf2Digest::Sha256));
        let new = codec(Algorithm::Bcrypt);
        let mut cred = Credential::new(&old, "admin", "pw").unwrap();

        assert!(!cred.check_and_upgrade(&new, "wrong").unwrap());
        assert_eq!(
            cred.stored_hash().algorithm(),
            Some(Algorithm::Pbkdf2(Pbkdf2Digest::Sha256))
        );

        assert!(cred.check_and_upgrade(&new, "pw").unwrap());
        assert_eq!(cred.stored_hash().algorithm(), Some(Algorithm::Bcrypt));
        assert!(cred.check_password(&new, "pw"));
    }

    #[test]
    fn serializes_stored_hash_as_string() {
        let cred = Credential::from_stored(
            "admin",
            StoredHash::new("bcrypt$2b$04$abc"),
            Utc::now(),
        );
        let json = serde_json::to_value(&cred).unwrap();
        assert_eq!(json["password"], "bcrypt$2b$04$abc");
        assert_eq!(json["username"], "admin");
    }
}
