//! bcrypt Helper - command-line host for the hashing library

use bcrypt_helper::core::config::{AppConfig, CliArgs, Command};
use bcrypt_helper::core::Logger;
use bcrypt_helper::PasswordHelper;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli_args = CliArgs::parse();

    // Load configuration (CLI args, env vars, and config file)
    let config = AppConfig::load(&cli_args)?;

    // Initialize logging system based on configuration
    let _logger = Logger::init(&config.logging)?;

    info!(
        version = bcrypt_helper::VERSION,
        cost = config.hashing.cost,
        strong = config.hashing.strong,
        "Hashing configuration"
    );

    let helper = PasswordHelper::new(config.hashing);

    let code = match cli_args.command {
        Command::Hash { password, settings } => {
            let hashed = helper.hash(&password, settings.as_deref())?;
            println!("{}", hashed);
            ExitCode::SUCCESS
        }
        Command::Validate { password, hash } => {
            let matches = helper.validate(&password, &hash)?;
            println!("{}", matches);
            if matches {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Command::Settings => {
            println!("{}", helper.settings(None, None)?);
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
