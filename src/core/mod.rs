//! Core application layer
//!
//! This module provides:
//! - Configuration management
//! - Structured logging system
//! - Error handling and type system

pub mod config;
pub mod error;
pub mod logging;

pub use config::{AppConfig, ConfigError, HashingConfig, LoggingConfig};
pub use error::{HashError, Result};
pub use logging::Logger;
