use super::{Context, write_line};
use crate::cli::TokenCommand;
use crate::error::AskCellError;

use answer_core::credentials::{CredentialStore, TOKEN_ENV_VAR, load_env_token};

use std::io::Write;

pub fn run(
    context: &Context,
    command: TokenCommand,
    output: &mut dyn Write,
) -> Result<(), AskCellError> {
    let store = context.credential_store();

    match command {
        TokenCommand::Set { token } => {
            store.save(&token)?;
            write_line(
                output,
                &format!("API token saved to {}", store.path().display()),
            )
        }
        TokenCommand::Clear => {
            store.clear()?;
            write_line(output, "API token cleared")
        }
        TokenCommand::Status => {
            let stored = store.load()?;
            let from_env = load_env_token(TOKEN_ENV_VAR)?;

            let status = match (&from_env, &stored) {
                (Some(token), _) => {
                    format!("Using token from {TOKEN_ENV_VAR} ({} chars)", token.len())
                }
                (None, Some(token)) => format!("Using stored token ({} chars)", token.len()),
                (None, None) => String::from("No API token configured; requests are anonymous"),
            };
            write_line(output, &status)
        }
    }
}
