use thiserror::Error;

/// All errors that can occur in passcodec.
///
/// Verification never produces an error: malformed or unknown stored
/// hashes simply do not match.  The variants below are reserved for
/// configuration defects, primitive failures, and the CLI surface.
#[derive(Debug, Error)]
pub enum PassCodecError {
    // --- Configuration errors (fatal for the deployment) ---
    #[error("Unsupported password algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid password configuration: {0}")]
    InvalidConfig(String),

    // --- Primitive errors (fatal for the call) ---
    #[error("Hashing primitive failed: {0}")]
    PrimitiveFailure(String),

    // --- Stored hash inspection ---
    #[error("Malformed stored hash: {0}")]
    MalformedHash(String),

    // --- Config file errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Password does not match the stored hash")]
    PasswordMismatch,
}

impl PassCodecError {
    /// True for errors caused by a misconfigured deployment (unknown
    /// algorithm, out-of-range work factor, bad config file).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedAlgorithm(_) | Self::InvalidConfig(_) | Self::ConfigError(_)
        )
    }

    /// True when the underlying cryptographic routine itself failed.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::PrimitiveFailure(_))
    }
}

/// Convenience type alias for passcodec results.
pub type Result<T> = std::result::Result<T, PassCodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_classified() {
        assert!(PassCodecError::UnsupportedAlgorithm("md5".into()).is_configuration());
        assert!(PassCodecError::InvalidConfig("cost".into()).is_configuration());
        assert!(!PassCodecError::PrimitiveFailure("rng".into()).is_configuration());
    }

    #[test]
    fn primitive_errors_are_classified() {
        assert!(PassCodecError::PrimitiveFailure("rng".into()).is_primitive());
        assert!(!PassCodecError::InvalidConfig("cost".into()).is_primitive());
        assert!(!PassCodecError::PasswordMismatch.is_primitive());
    }
}
