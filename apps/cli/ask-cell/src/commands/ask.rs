use super::{Context, read_all, write_line};
use crate::cli::{AskArgs, strategy_for};
use crate::console_host::ConsoleHost;
use crate::error::AskCellError;

use answer_core::AnswerClient;
use answer_core::credentials::{TOKEN_ENV_VAR, resolve_credential};
use answer_core::panel::{AnswerPanel, LogStatusSink};

use std::io::{Read, Write};

pub async fn run(
    context: &Context,
    args: AskArgs,
    input: &mut dyn Read,
    output: &mut dyn Write,
) -> Result<(), AskCellError> {
    let question = match args.question {
        Some(question) => question,
        None => read_all(input)?.trim_end_matches(['\r', '\n']).to_string(),
    };

    let store = context.credential_store();
    let credential = resolve_credential(args.token.as_deref(), TOKEN_ENV_VAR, &store)?;
    let client = AnswerClient::from_config(&context.config.service)?;

    if args.raw {
        let answer = client.submit(&question, credential.as_ref()).await?;
        return write_line(output, answer.as_str());
    }

    let strategy = strategy_for(args.tree, context.config.normalizer.strategy);
    let panel = AnswerPanel::new(client, strategy);
    let host = ConsoleHost::new(question, output);

    panel
        .answer_selection(&host, &LogStatusSink, credential.as_ref())
        .await?;

    Ok(())
}
