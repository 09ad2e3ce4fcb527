// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! todos - a to-do list for your terminal
//!
//! Entry point for the todos CLI application.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use todos::cli::{Cli, Commands};
use todos::commands::run_command;
use todos::config::Settings;
use todos::context::TodoContext;
use todos::persistence::TodoPersistence;
use todos::storage::{FileStorage, MemoryStorage};
use todos::tui::run_tui;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Tui));

    init_tracing(cli.verbose, interactive)?;

    // Load settings
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("failed to load settings")?;
    if let Some(dir) = &cli.data_dir {
        settings.storage.data_dir = Some(dir.clone());
    }

    let context = open_context(&cli, &settings);

    match cli.command {
        None | Some(Commands::Tui) => run_tui(context, settings)?,
        Some(command) => {
            let stdout = std::io::stdout();
            run_command(command, &context, &mut stdout.lock())?;
        }
    }

    Ok(())
}

/// Initialize tracing.
///
/// While the terminal UI owns the screen, logs go to a file in the todos
/// home instead of stderr.
fn init_tracing(verbose: u8, interactive: bool) -> anyhow::Result<()> {
    let mut env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    // `-v` turns on debug output for this crate; `RUST_LOG` still takes precedence.
    if verbose > 0 {
        if let Ok(parsed) = "todos=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    if interactive {
        let log_path = Settings::log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("failed to open log file {}", log_path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

/// Build the session context over the configured storage
fn open_context(cli: &Cli, settings: &Settings) -> TodoContext {
    let slot = settings.storage.slot.clone();
    if cli.ephemeral {
        tracing::info!("Using in-memory storage");
        return TodoContext::initialize(TodoPersistence::new(MemoryStorage::new(), slot));
    }

    let dir = settings.data_dir();
    tracing::info!("Using storage directory {:?}", dir);
    TodoContext::initialize(TodoPersistence::new(FileStorage::new(dir), slot))
}
