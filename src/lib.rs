//! bcrypt Helper Library
//!
//! This library provides salted bcrypt password hashing and validation,
//! configured once with a cost factor and an entropy strength.

pub mod core;
pub mod password;

// Re-export commonly used types
pub use crate::core::{HashError, HashingConfig, Result};
pub use password::{HashSettings, HashString, PasswordHelper};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
