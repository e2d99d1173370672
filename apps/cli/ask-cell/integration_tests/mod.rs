mod ask;
mod config;
mod normalize;
mod token;

use ask_cell::cli::Cli;
use ask_cell::commands::execute;
use ask_cell::error::AskCellError;

use std::path::Path;

use clap::Parser;

/// Run the CLI in-process against `config_dir`, returning stdout.
pub async fn run_cli(
    config_dir: &Path,
    args: &[&str],
    stdin: &str,
) -> (Result<(), AskCellError>, String) {
    let dir = config_dir.to_str().unwrap();
    let argv = ["ask-cell", "--config-dir", dir]
        .into_iter()
        .chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).unwrap();

    let mut input = stdin.as_bytes();
    let mut output = Vec::new();
    let result = execute(cli, &mut input, &mut output).await;

    (result, String::from_utf8(output).unwrap())
}
