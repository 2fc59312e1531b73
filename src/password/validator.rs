//! Password validation against stored hashes

use crate::core::error::Result;
use crate::password::hasher::Hasher;
use crate::password::types::constant_time_eq;

/// Checks a password against a stored hash string
#[derive(Clone)]
pub struct Validator {
    hasher: Hasher,
}

impl Validator {
    pub fn new(hasher: Hasher) -> Self {
        Self { hasher }
    }

    /// Recompute the hash with the stored string's own settings and compare
    ///
    /// Returns `Ok(false)` only for a genuine mismatch. A stored hash the
    /// primitive cannot process is an error, never `false`.
    pub fn validate(&self, password: impl AsRef<[u8]>, stored_hash: &str) -> Result<bool> {
        let computed = self.hasher.hash(password, Some(stored_hash))?;
        Ok(constant_time_eq(
            computed.as_str().as_bytes(),
            stored_hash.as_bytes(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::HashingConfig;
    use crate::core::error::HashError;
    use crate::password::entropy::SystemEntropy;
    use crate::password::primitive::{Bcrypt, BcryptPrimitive};
    use crate::password::settings::SettingsBuilder;
    use crate::password::testing::FailingEntropy;
    use std::sync::Arc;

    fn validator() -> Validator {
        let primitive: Arc<dyn BcryptPrimitive> = Arc::new(Bcrypt);
        let settings = SettingsBuilder::new(
            HashingConfig::new(4, false),
            Arc::new(SystemEntropy),
            primitive.clone(),
        );
        Validator::new(Hasher::new(settings, primitive))
    }

    #[test]
    fn test_known_vectors_validate() {
        let validator = validator();

        assert!(validator
            .validate("", "$2a$06$cDTyXCPyZ0npLBTSbVTSTe7GWMx9.3G/fpj8oDiyuQdsa2iqpFGmO")
            .unwrap());
        assert!(validator
            .validate(
                "password",
                "$2a$06$OxDCTUayLyPtLRWxbhPoPer8io68QbDErcImQ1oQKuFgO5Vkawfuu"
            )
            .unwrap());
        assert!(!validator
            .validate(
                "Password",
                "$2a$06$OxDCTUayLyPtLRWxbhPoPer8io68QbDErcImQ1oQKuFgO5Vkawfuu"
            )
            .unwrap());
    }

    #[test]
    fn test_round_trip_and_mismatch() {
        let validator = validator();
        let stored = validator.hasher.hash("secure_password_123", None).unwrap();

        assert!(validator.validate("secure_password_123", stored.as_str()).unwrap());
        assert!(!validator.validate("wrong_password", stored.as_str()).unwrap());
        assert!(!validator.validate("", stored.as_str()).unwrap());
    }

    #[test]
    fn test_tampered_digest_is_mismatch() {
        let validator = validator();
        let stored = "$2a$06$OxDCTUayLyPtLRWxbhPoPer8io68QbDErcImQ1oQKuFgO5Vkawfuv";

        assert!(!validator.validate("password", stored).unwrap());
    }

    #[test]
    fn test_unprocessable_stored_hash_is_an_error() {
        let validator = validator();

        assert!(matches!(
            validator.validate("password", "$2a$03$OxDCTUayLyPtLRWxbhPoPer8io68QbDErcImQ1oQKuFgO5Vkawfuu"),
            Err(HashError::InvalidSettings(_))
        ));
        assert!(matches!(
            validator.validate("password", "$2a$06$tooshort"),
            Err(HashError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_unrecognised_stored_hash_never_matches() {
        let validator = validator();
        assert!(!validator.validate("password", "plaintext-password").unwrap());
    }

    #[test]
    fn test_entropy_failure_is_not_a_mismatch() {
        let primitive: Arc<dyn BcryptPrimitive> = Arc::new(Bcrypt);
        let settings = SettingsBuilder::new(
            HashingConfig::new(4, false),
            Arc::new(FailingEntropy),
            primitive.clone(),
        );
        let validator = Validator::new(Hasher::new(settings, primitive));

        assert!(matches!(
            validator.validate("password", "not-a-hash"),
            Err(HashError::EntropySource(_))
        ));
        assert!(validator
            .validate(
                "password",
                "$2a$06$OxDCTUayLyPtLRWxbhPoPer8io68QbDErcImQ1oQKuFgO5Vkawfuu"
            )
            .unwrap());
    }
}
