//! Configuration management

use clap::{Parser, Subcommand};
use config::{Config as ConfigBuilder, ConfigError as BuilderError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Lowest cost accepted by the bcrypt primitive
pub const MIN_COST: u32 = 4;
/// Highest cost accepted by the bcrypt primitive
pub const MAX_COST: u32 = 31;
/// Cost used when none is configured
pub const DEFAULT_COST: u32 = 6;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid hashing configuration: {0}")]
    InvalidHashing(String),

    #[error("Invalid logging configuration: {0}")]
    InvalidLogging(String),

    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
}

impl From<BuilderError> for ConfigError {
    fn from(err: BuilderError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// Hashing parameters fixed at setup time and shared by every hashing call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    /// bcrypt work factor, embedded as given into generated settings
    pub cost: u32,
    /// Draw salts from the strong entropy source instead of the weak one
    pub strong: bool,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            cost: DEFAULT_COST,
            strong: false,
        }
    }
}

impl HashingConfig {
    pub fn new(cost: u32, strong: bool) -> Self {
        Self { cost, strong }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_COST..=MAX_COST).contains(&self.cost) {
            return Err(ConfigError::InvalidHashing(format!(
                "cost must be between {} and {}, got {}",
                MIN_COST, MAX_COST, self.cost
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            return Err(ConfigError::InvalidLogging(format!(
                "level must be one of: {:?}",
                valid_levels
            )));
        }

        let valid_formats = ["json", "text"];
        if !valid_formats.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidLogging(format!(
                "format must be one of: {:?}",
                valid_formats
            )));
        }

        Ok(())
    }
}

/// Configuration of the host binary
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub hashing: HashingConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration with precedence: CLI args > Environment variables > Config file > Defaults
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if let Some(config_path) = &cli_args.config {
            if !config_path.exists() {
                return Err(ConfigError::FileNotFound(config_path.display().to_string()));
            }
            builder = builder.add_source(File::from(config_path.as_path()));
        }

        // Example: BCRYPT_HELPER_HASHING__COST=10
        builder = builder.add_source(Self::environment());

        if let Some(cost) = cli_args.cost {
            builder = builder.set_override("hashing.cost", cost)?;
        }
        if cli_args.strong {
            builder = builder.set_override("hashing.strong", true)?;
        }
        if let Some(log_level) = &cli_args.log_level {
            builder = builder.set_override("logging.level", log_level.clone())?;
        }

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file path
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let config: AppConfig = Self::defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: AppConfig = Self::defaults()?
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hashing.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let hashing = HashingConfig::default();
        let logging = LoggingConfig::default();

        Ok(ConfigBuilder::builder()
            .set_default("hashing.cost", hashing.cost)?
            .set_default("hashing.strong", hashing.strong)?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format)?)
    }

    fn environment() -> Environment {
        Environment::with_prefix("BCRYPT_HELPER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }
}

/// Command-line arguments of the host binary
#[derive(Debug, Parser)]
#[command(name = "bcrypt-helper")]
#[command(about = "Salted bcrypt hashing and validation", long_about = None)]
pub struct CliArgs {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// bcrypt cost factor for freshly generated settings
    #[arg(long, value_name = "COST", global = true)]
    pub cost: Option<u32>,

    /// Use the strong entropy source for salts
    #[arg(long, global = true)]
    pub strong: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Hash a password, reusing SETTINGS when they look valid
    Hash {
        password: String,
        #[arg(short, long)]
        settings: Option<String>,
    },
    /// Check a password against a stored hash
    Validate { password: String, hash: String },
    /// Print freshly generated settings
    Settings,
}
