use ask_cell::cli::Cli;
use ask_cell::commands::{execute, resolve_config_dir};
use ask_cell::logger::initialize as LoggerInitialize;

use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};

const LOG_DIR_NAME: &str = "logs";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_dir = match resolve_config_dir(&cli) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    let log_dir = config_dir.join(LOG_DIR_NAME);
    if let Err(e) = LoggerInitialize(&log_dir, cli.verbose) {
        // Keep going without a log file; answers still go to stdout.
        eprintln!("{}", e.user_message());
    }

    info!("ask-cell starting");
    debug!("Config directory: {}", config_dir.display());

    let mut input = stdin().lock();
    let mut output = stdout().lock();

    match execute(cli, &mut input, &mut output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
