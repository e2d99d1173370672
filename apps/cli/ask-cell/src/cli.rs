//! Command-line arguments.

use answer_core::config::Environment;
use answer_core::normalizer::NormalizeStrategy;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "ask-cell",
    version,
    about = "Ask the analysis service a question and get a spreadsheet-ready answer"
)]
pub struct Cli {
    /// Directory holding config.json, credentials.json and logs
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Deployment environment whose endpoint is used
    #[arg(long = "env", global = true, value_enum)]
    pub environment: Option<EnvironmentArg>,

    /// Explicit endpoint URL, overriding the environment
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask a question (argument, or stdin when omitted) and print the answer
    Ask(AskArgs),

    /// Manage the stored API token
    #[command(subcommand)]
    Token(TokenCommand),

    /// Convert an HTML answer read from stdin to plain text
    Normalize(NormalizeArgs),

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
pub struct AskArgs {
    /// The question; read from stdin when omitted
    pub question: Option<String>,

    /// Print the answer exactly as the service returned it
    #[arg(long)]
    pub raw: bool,

    /// Use the parse-tree normalizer instead of the configured one
    #[arg(long, conflicts_with = "raw")]
    pub tree: bool,

    /// API token for this call only
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Validate and store a token
    Set {
        token: String,
    },
    /// Remove the stored token
    Clear,
    /// Report where the token would come from, without printing it
    Status,
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Use the parse-tree normalizer
    #[arg(long)]
    pub tree: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as JSON
    Show,
    /// Write the effective configuration to config.json
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvironmentArg {
    Local,
    Production,
}

impl From<EnvironmentArg> for Environment {
    fn from(arg: EnvironmentArg) -> Self {
        match arg {
            EnvironmentArg::Local => Environment::Local,
            EnvironmentArg::Production => Environment::Production,
        }
    }
}

pub fn strategy_for(tree: bool, configured: NormalizeStrategy) -> NormalizeStrategy {
    if tree {
        NormalizeStrategy::Tree
    } else {
        configured
    }
}
