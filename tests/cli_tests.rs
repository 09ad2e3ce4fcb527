// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::Parser;
use std::path::PathBuf;
use todos::cli::{Cli, Commands};

#[test]
fn test_parse_no_command_defaults_to_tui() {
    let cli = Cli::try_parse_from(["todos"]).expect("Valid command parsing");
    assert!(cli.command.is_none());
    assert!(!cli.ephemeral);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn test_parse_tui_command() {
    let cli = Cli::try_parse_from(["todos", "tui"]).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Tui)));
}

#[test]
fn test_parse_add_joins_words() {
    let cli = Cli::try_parse_from(["todos", "add", "buy", "milk"]).expect("Valid command parsing");
    if let Some(Commands::Add(args)) = cli.command {
        assert_eq!(args.joined(), "buy milk");
    } else {
        panic!("Expected Add command");
    }
}

#[test]
fn test_parse_add_requires_text() {
    assert!(Cli::try_parse_from(["todos", "add"]).is_err());
}

#[test]
fn test_parse_toggle_id() {
    let cli = Cli::try_parse_from(["todos", "toggle", "1712345678901"]).expect("Valid command parsing");
    if let Some(Commands::Toggle(args)) = cli.command {
        assert_eq!(args.id.as_raw(), 1712345678901);
    } else {
        panic!("Expected Toggle command");
    }
}

#[test]
fn test_parse_rejects_non_numeric_id() {
    assert!(Cli::try_parse_from(["todos", "delete", "abc"]).is_err());
}

#[test]
fn test_parse_edit() {
    let cli = Cli::try_parse_from(["todos", "edit", "42", "new", "words"]).expect("Valid command parsing");
    if let Some(Commands::Edit(args)) = cli.command {
        assert_eq!(args.id.as_raw(), 42);
        assert_eq!(args.joined(), "new words");
    } else {
        panic!("Expected Edit command");
    }
}

#[test]
fn test_parse_aliases() {
    let cli = Cli::try_parse_from(["todos", "ls"]).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::List)));

    let cli = Cli::try_parse_from(["todos", "rm", "7"]).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Delete(_))));
}

#[test]
fn test_parse_clear_completed() {
    let cli = Cli::try_parse_from(["todos", "clear-completed"]).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::ClearCompleted)));
}

#[test]
fn test_parse_global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "todos",
        "list",
        "--data-dir",
        "/tmp/todos",
        "--config",
        "/tmp/settings.json",
        "--ephemeral",
        "-vv",
    ])
    .expect("Valid command parsing");
    assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/todos")));
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/settings.json")));
    assert!(cli.ephemeral);
    assert_eq!(cli.verbose, 2);
}
