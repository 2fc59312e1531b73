//! Error type system for the hashing core
//!
//! Only two failure kinds exist: the entropy source could not supply bytes,
//! or the settings handed to the bcrypt primitive were rejected. Both are
//! propagated to the caller unchanged and are never retried.

/// Main error type for hashing and validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Entropy source error: {0}")]
    EntropySource(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl HashError {
    /// Get the error type name for callers that report errors by kind
    pub fn error_type(&self) -> &'static str {
        match self {
            HashError::EntropySource(_) => "EntropySourceError",
            HashError::InvalidSettings(_) => "InvalidSettings",
        }
    }

    /// Check if this error is retryable
    ///
    /// Neither kind is: an exhausted entropy source and a malformed settings
    /// string both need intervention from the caller.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl From<rand::Error> for HashError {
    fn from(err: rand::Error) -> Self {
        HashError::EntropySource(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for HashError {
    fn from(err: bcrypt::BcryptError) -> Self {
        HashError::InvalidSettings(err.to_string())
    }
}

/// Result type alias for operations that can fail with HashError
pub type Result<T> = std::result::Result<T, HashError>;
