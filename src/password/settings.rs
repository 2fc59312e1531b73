//! Fresh bcrypt settings generation

use crate::core::config::HashingConfig;
use crate::core::error::Result;
use crate::password::entropy::EntropySource;
use crate::password::primitive::BcryptPrimitive;
use crate::password::types::{HashSettings, SALT_LEN};
use std::sync::Arc;

/// Builds `$2a$<cost>$<salt>` settings from a freshly drawn salt
#[derive(Clone)]
pub struct SettingsBuilder {
    config: HashingConfig,
    entropy: Arc<dyn EntropySource>,
    primitive: Arc<dyn BcryptPrimitive>,
}

impl SettingsBuilder {
    pub fn new(
        config: HashingConfig,
        entropy: Arc<dyn EntropySource>,
        primitive: Arc<dyn BcryptPrimitive>,
    ) -> Self {
        Self {
            config,
            entropy,
            primitive,
        }
    }

    pub fn config(&self) -> &HashingConfig {
        &self.config
    }

    /// Generate settings, falling back to the configured cost and entropy
    /// strength for absent arguments
    ///
    /// The cost is embedded as given. An out-of-range cost is reported by the
    /// primitive once the settings are used.
    pub fn build(&self, cost: Option<u32>, strong: Option<bool>) -> Result<HashSettings> {
        let cost = cost.unwrap_or(self.config.cost);
        let strong = strong.unwrap_or(self.config.strong);

        let raw = self.entropy.bytes(SALT_LEN, strong)?;
        let salt = self.primitive.encode_salt(&raw);

        tracing::debug!(cost, strong, "Generated fresh bcrypt settings");

        Ok(HashSettings::new(cost, salt))
    }

    /// Generate settings from the configured defaults
    pub fn build_default(&self) -> Result<HashSettings> {
        self.build(None, None)
    }
}
