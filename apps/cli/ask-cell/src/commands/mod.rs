//! Command handlers. Each takes explicit input/output streams so the binary
//! and the tests drive them the same way.

pub mod ask;
pub mod config;
pub mod normalize;
pub mod token;

use crate::cli::{Cli, Command};
use crate::error::AskCellError;

use answer_core::config::{AppConfig, default_config_dir};
use answer_core::credentials::FileCredentialStore;

use std::io::{Read, Write};
use std::path::PathBuf;

use log::debug;

/// Settings shared by every command, after CLI overrides.
#[derive(Debug, Clone)]
pub struct Context {
    pub config_dir: PathBuf,
    pub config: AppConfig,
}

impl Context {
    pub fn credential_store(&self) -> FileCredentialStore {
        FileCredentialStore::new(&self.config_dir)
    }
}

/// `--config-dir`, or the platform default.
pub fn resolve_config_dir(cli: &Cli) -> Result<PathBuf, AskCellError> {
    match &cli.config_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(default_config_dir()?),
    }
}

/// Load config from the config directory and apply `--env` / `--endpoint`.
///
/// # Errors
///
/// Returns an error if the config file is invalid or the overrides are.
pub fn prepare(cli: &Cli) -> Result<Context, AskCellError> {
    let config_dir = resolve_config_dir(cli)?;
    let mut config = AppConfig::load(&config_dir)?;

    if let Some(environment) = cli.environment {
        config.service.environment = environment.into();
    }
    if let Some(endpoint) = &cli.endpoint {
        config.service.endpoint_override = Some(endpoint.clone());
    }
    config.validate()?;

    debug!("Using endpoint {}", config.service.endpoint());
    Ok(Context { config_dir, config })
}

/// Run the parsed command.
pub async fn execute(
    cli: Cli,
    input: &mut dyn Read,
    output: &mut dyn Write,
) -> Result<(), AskCellError> {
    let context = prepare(&cli)?;

    match cli.command {
        Command::Ask(args) => ask::run(&context, args, input, output).await,
        Command::Token(command) => token::run(&context, command, output),
        Command::Normalize(args) => normalize::run(&context, args, input, output),
        Command::Config(command) => config::run(&context, command, output),
    }
}

pub(crate) fn read_all(input: &mut dyn Read) -> Result<String, AskCellError> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(|e| AskCellError::io(format!("Failed to read stdin: {e}")))?;
    Ok(text)
}

pub(crate) fn write_line(output: &mut dyn Write, text: &str) -> Result<(), AskCellError> {
    writeln!(output, "{text}")
        .and_then(|_| output.flush())
        .map_err(|e| AskCellError::io(format!("Failed to write output: {e}")))
}
