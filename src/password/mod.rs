//! Password hashing module
//!
//! This module provides salted bcrypt hashing including:
//! - Settings generation from a configured cost and entropy source
//! - Hashing with reuse of existing settings
//! - Validation of passwords against stored hashes
//! - The entropy and bcrypt collaborators behind traits

pub mod entropy;
pub mod hasher;
pub mod helper;
pub mod primitive;
pub mod settings;
pub mod types;
pub mod validator;

#[cfg(test)]
pub(crate) mod testing;

pub use entropy::{EntropySource, SystemEntropy};
pub use hasher::{looks_like_settings, Hasher};
pub use helper::PasswordHelper;
pub use primitive::{Bcrypt, BcryptPrimitive, BCRYPT_BASE64};
pub use settings::SettingsBuilder;
pub use types::{HashSettings, HashString};
pub use validator::Validator;
