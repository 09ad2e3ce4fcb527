// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for todos.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::todo::TodoId;

/// todos - a to-do list for your terminal
#[derive(Parser, Debug)]
#[command(name = "todos")]
#[command(version, about = "A to-do list for your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the stored list
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep the list in memory only; nothing is read or written
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive list (default when no command given)
    Tui,

    /// Print the list, newest first
    #[command(alias = "ls")]
    List,

    /// Add a todo
    Add(TextArgs),

    /// Flip a todo between done and not done
    Toggle(IdArgs),

    /// Replace a todo's text
    Edit(EditArgs),

    /// Delete a todo
    #[command(alias = "rm")]
    Delete(IdArgs),

    /// Delete every completed todo
    ClearCompleted,
}

/// Free text, joined with spaces
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Todo text
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl TextArgs {
    pub fn joined(&self) -> String {
        self.text.join(" ")
    }
}

/// A single todo id
#[derive(Args, Debug)]
pub struct IdArgs {
    /// Todo id as shown by `list`
    pub id: TodoId,
}

/// Arguments for `edit`
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Todo id as shown by `list`
    pub id: TodoId,

    /// New text
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl EditArgs {
    pub fn joined(&self) -> String {
        self.text.join(" ")
    }
}
