use super::{Context, write_line};
use crate::cli::ConfigCommand;
use crate::error::AskCellError;

use std::io::Write;

const CONFIG_FILE_NAME: &str = "config.json";

pub fn run(
    context: &Context,
    command: ConfigCommand,
    output: &mut dyn Write,
) -> Result<(), AskCellError> {
    match command {
        ConfigCommand::Show => {
            let json = serde_json::to_string_pretty(&context.config)
                .map_err(|e| AskCellError::ask_cell(format!("Failed to render config: {e}")))?;
            write_line(output, &json)
        }
        ConfigCommand::Init { force } => {
            let path = context.config_dir.join(CONFIG_FILE_NAME);
            if path.exists() && !force {
                return Err(AskCellError::ask_cell(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }

            context.config.save(&context.config_dir)?;
            write_line(output, &format!("Config written to {}", path.display()))
        }
    }
}
