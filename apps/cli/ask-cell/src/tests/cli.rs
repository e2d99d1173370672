// Unit tests for argument parsing

use crate::cli::{Cli, Command, ConfigCommand, EnvironmentArg, TokenCommand, strategy_for};

use answer_core::normalizer::NormalizeStrategy;

use clap::Parser;

#[test]
fn given_ask_with_question_when_parsed_then_question_and_flags_are_set() {
    let cli = Cli::try_parse_from([
        "ask-cell",
        "--env",
        "local",
        "ask",
        "What is churn?",
        "--tree",
        "--token",
        "abc123",
    ])
    .unwrap();

    assert_eq!(cli.environment, Some(EnvironmentArg::Local));
    match cli.command {
        Command::Ask(args) => {
            assert_eq!(args.question.as_deref(), Some("What is churn?"));
            assert!(args.tree);
            assert!(!args.raw);
            assert_eq!(args.token.as_deref(), Some("abc123"));
        }
        other => panic!("expected ask, got {other:?}"),
    }
}

/// **VALUE**: `--raw` and `--tree` are mutually exclusive.
///
/// **BUG THIS CATCHES**: Would catch a silent choice between the two when a
/// user asks for both.
#[test]
fn given_raw_and_tree_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["ask-cell", "ask", "q", "--raw", "--tree"]);

    assert!(result.is_err());
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_accepted() {
    let cli = Cli::try_parse_from([
        "ask-cell",
        "token",
        "status",
        "--config-dir",
        "/tmp/ask",
        "--endpoint",
        "http://127.0.0.1:9/api/ask",
        "-v",
    ])
    .unwrap();

    assert!(matches!(cli.command, Command::Token(TokenCommand::Status)));
    assert_eq!(cli.config_dir.unwrap().to_str(), Some("/tmp/ask"));
    assert_eq!(cli.endpoint.as_deref(), Some("http://127.0.0.1:9/api/ask"));
    assert!(cli.verbose);
}

#[test]
fn given_config_init_force_when_parsed_then_force_set() {
    let cli = Cli::try_parse_from(["ask-cell", "config", "init", "--force"]).unwrap();

    assert!(matches!(
        cli.command,
        Command::Config(ConfigCommand::Init { force: true })
    ));
}

#[test]
fn given_tree_flag_when_strategy_for_then_tree_overrides_config() {
    assert_eq!(
        strategy_for(true, NormalizeStrategy::Pattern),
        NormalizeStrategy::Tree
    );
    assert_eq!(
        strategy_for(false, NormalizeStrategy::Tree),
        NormalizeStrategy::Tree
    );
    assert_eq!(
        strategy_for(false, NormalizeStrategy::Pattern),
        NormalizeStrategy::Pattern
    );
}
