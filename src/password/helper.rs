//! Host-facing facade over the hasher and validator

use crate::core::config::HashingConfig;
use crate::core::error::Result;
use crate::password::entropy::{EntropySource, SystemEntropy};
use crate::password::hasher::Hasher;
use crate::password::primitive::{Bcrypt, BcryptPrimitive};
use crate::password::settings::SettingsBuilder;
use crate::password::types::{HashSettings, HashString};
use crate::password::validator::Validator;
use std::sync::Arc;

/// The two operations a host application embeds: `hash` and `validate`
///
/// Built once at startup from a [`HashingConfig`]. Cloning is cheap and
/// clones can be used from any thread.
#[derive(Clone)]
pub struct PasswordHelper {
    hasher: Hasher,
    validator: Validator,
}

impl PasswordHelper {
    /// Helper backed by the OS entropy sources and the `bcrypt` crate
    pub fn new(config: HashingConfig) -> Self {
        Self::with_collaborators(config, Arc::new(SystemEntropy), Arc::new(Bcrypt))
    }

    pub fn with_collaborators(
        config: HashingConfig,
        entropy: Arc<dyn EntropySource>,
        primitive: Arc<dyn BcryptPrimitive>,
    ) -> Self {
        let settings = SettingsBuilder::new(config, entropy, primitive.clone());
        let hasher = Hasher::new(settings, primitive);
        let validator = Validator::new(hasher.clone());

        Self { hasher, validator }
    }

    pub fn config(&self) -> &HashingConfig {
        self.hasher.settings_builder().config()
    }

    /// See [`Hasher::hash`]
    pub fn hash(&self, password: impl AsRef<[u8]>, settings: Option<&str>) -> Result<HashString> {
        self.hasher.hash(password, settings)
    }

    /// See [`Validator::validate`]
    pub fn validate(&self, password: impl AsRef<[u8]>, stored_hash: &str) -> Result<bool> {
        self.validator.validate(password, stored_hash)
    }

    /// See [`SettingsBuilder::build`]
    pub fn settings(&self, cost: Option<u32>, strong: Option<bool>) -> Result<HashSettings> {
        self.hasher.settings_builder().build(cost, strong)
    }
}

impl Default for PasswordHelper {
    fn default() -> Self {
        Self::new(HashingConfig::default())
    }
}
