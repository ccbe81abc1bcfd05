//! Cryptographic building blocks for passcodec.
//!
//! This module provides:
//! - The closed set of supported algorithms (`algorithm`)
//! - bcrypt stored hashes (`bcrypt_hasher`)
//! - PBKDF2-HMAC-SHA2 stored hashes (`pbkdf2_hasher`)
//! - Salt generation and constant-time comparison (`random`)

pub mod algorithm;
pub mod bcrypt_hasher;
pub mod pbkdf2_hasher;
pub mod random;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{Algorithm, encode_pbkdf2, generate_salt, ...};
pub use algorithm::{is_supported, Algorithm, Pbkdf2Digest};
pub use bcrypt_hasher::{encode_bcrypt, verify_bcrypt, BCRYPT_TAG};
pub use pbkdf2_hasher::{encode_pbkdf2, try_verify_pbkdf2, verify_pbkdf2, Pbkdf2Hash};
pub use random::{constant_time_eq, generate_salt};
