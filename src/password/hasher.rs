//! Password hashing with settings reuse

use crate::core::error::Result;
use crate::password::primitive::BcryptPrimitive;
use crate::password::settings::SettingsBuilder;
use crate::password::types::HashString;
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;

lazy_static! {
    static ref SETTINGS_PREFIX: Regex = Regex::new(r"^\$2a\$[0-9]{2}\$").unwrap();
}

/// Whether `settings` starts with `$2a$`, two digits and `$`
///
/// Only the prefix is inspected. The salt is left for the primitive to judge.
pub fn looks_like_settings(settings: &str) -> bool {
    SETTINGS_PREFIX.is_match(settings)
}

/// Computes hash strings, reusing caller-supplied settings when they look valid
#[derive(Clone)]
pub struct Hasher {
    settings: SettingsBuilder,
    primitive: Arc<dyn BcryptPrimitive>,
}

impl Hasher {
    pub fn new(settings: SettingsBuilder, primitive: Arc<dyn BcryptPrimitive>) -> Self {
        Self {
            settings,
            primitive,
        }
    }

    pub fn settings_builder(&self) -> &SettingsBuilder {
        &self.settings
    }

    /// Hash `password`
    ///
    /// Settings matching [`looks_like_settings`] are passed to the primitive
    /// verbatim, which is what lets a stored hash be recomputed. Anything else
    /// is discarded in favour of fresh settings. Once accepted, a rejection by
    /// the primitive is returned without falling back.
    pub fn hash(&self, password: impl AsRef<[u8]>, settings: Option<&str>) -> Result<HashString> {
        let password = password.as_ref();

        match settings {
            Some(settings) if looks_like_settings(settings) => {
                tracing::debug!("Reusing supplied bcrypt settings");
                self.primitive.hash(password, settings)
            }
            supplied => {
                if supplied.is_some() {
                    tracing::debug!("Discarding malformed bcrypt settings");
                }
                let fresh = self.settings.build_default()?;
                self.primitive.hash(password, &fresh.to_string())
            }
        }
    }
}
