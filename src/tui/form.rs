// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! New-todo form
//!
//! Holds the draft being typed and turns it into an `add` on submit.

use crate::context::TodoContext;
use crate::todo::{TodoDraft, TodoId};

/// Input form for adding todos
#[derive(Debug, Clone, Default)]
pub struct TodoForm {
    /// Text typed so far, not yet submitted
    pub draft: String,
}

impl TodoForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop(&mut self) {
        self.draft.pop();
    }

    /// Add the draft as a new todo and clear it.
    ///
    /// Blank drafts are ignored and left in place.
    pub fn submit(&mut self, context: &TodoContext) -> Option<TodoId> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        Some(context.add_todo(TodoDraft::new(text)))
    }
}
