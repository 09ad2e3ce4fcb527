// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! todos - a single-user to-do list for the terminal.
//!
//! This crate exposes the pieces used by the `todos` binary (`src/main.rs`):
//! - `todo`: the `Todo` entity and creation-time id generation
//! - `storage`: local key-value storage backends (files, memory)
//! - `persistence`: JSON round-trip of the whole list through one storage slot
//! - `store`: the ordered collection, its mutations and snapshot observers
//! - `context`: the session handle views use to read and change the list
//! - `tui`: ratatui front end; `cli`/`commands`: argument parsing and one-shot commands

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod persistence;
pub mod storage;
pub mod store;
pub mod todo;
pub mod tui;

pub use context::TodoContext;
pub use error::{Result, TodoError};
pub use todo::{Todo, TodoDraft, TodoId};
