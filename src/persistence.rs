// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Persistence adapter
//!
//! Stores the whole todo collection as JSON in a single named slot of a
//! key-value storage backend.

use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::store::{Snapshot, SnapshotObserver};
use crate::todo::Todo;

/// Default slot name
pub const DEFAULT_SLOT: &str = "todos";

/// Reads and writes the todo collection in one storage slot
#[derive(Debug, Clone)]
pub struct TodoPersistence<S> {
    storage: S,
    slot: String,
}

impl<S: KeyValueStorage> TodoPersistence<S> {
    pub fn new(storage: S, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
        }
    }

    /// Previously stored todos, or nothing.
    ///
    /// A missing slot, a stored `null`, an unreadable slot and a value that
    /// fails to decode all mean "no data".
    pub fn load(&self) -> Vec<Todo> {
        let raw = match self.storage.get_item(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read slot '{}': {}", self.slot, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<Todo>>>(&raw) {
            Ok(todos) => {
                let todos = todos.unwrap_or_default();
                tracing::debug!("Loaded {} todos from slot '{}'", todos.len(), self.slot);
                todos
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable slot '{}': {}", self.slot, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with the full collection
    pub fn save(&self, todos: &[Todo]) -> Result<()> {
        let content = serde_json::to_string(todos)?;
        self.storage.set_item(&self.slot, &content)?;
        tracing::debug!("Saved {} todos to slot '{}'", todos.len(), self.slot);
        Ok(())
    }
}

impl<S: KeyValueStorage> SnapshotObserver for TodoPersistence<S> {
    fn on_snapshot(&mut self, todos: &Snapshot) {
        if let Err(e) = self.save(todos) {
            tracing::error!("Failed to persist todos to slot '{}': {}", self.slot, e);
        }
    }
}
