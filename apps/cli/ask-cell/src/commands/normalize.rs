use super::{Context, read_all, write_line};
use crate::cli::{NormalizeArgs, strategy_for};
use crate::error::AskCellError;

use answer_core::normalizer::normalize_with;

use std::io::{Read, Write};

pub fn run(
    context: &Context,
    args: NormalizeArgs,
    input: &mut dyn Read,
    output: &mut dyn Write,
) -> Result<(), AskCellError> {
    let raw = read_all(input)?;
    let strategy = strategy_for(args.tree, context.config.normalizer.strategy);

    write_line(output, &normalize_with(&raw, strategy))
}
