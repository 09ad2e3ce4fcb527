// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Todo entity and id generation

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a todo: milliseconds since the Unix epoch at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Wrap a raw id value
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw id value
    pub const fn as_raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A single list entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// User-supplied content
    pub text: String,
    /// Whether the todo is done
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Build a todo from an id and a draft
    pub fn from_draft(id: TodoId, draft: TodoDraft) -> Self {
        Self {
            id,
            text: draft.text,
            completed: draft.completed,
        }
    }

    /// Copy of this todo with new text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Copy of this todo with `completed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Transient user input submitted to `add`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub text: String,
    pub completed: bool,
}

impl TodoDraft {
    /// A fresh, not yet completed draft
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// Hands out creation-time ids.
///
/// Two calls within the same millisecond, or a clock that steps backwards,
/// still yield strictly increasing ids. Once `i64::MAX` has been handed out
/// or observed, counting restarts from the wall clock; callers holding
/// existing ids must skip any that are taken.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure future ids are greater than `id`
    pub fn observe(&mut self, id: TodoId) {
        self.last = Some(self.last.map_or(id.0, |last| last.max(id.0)));
    }

    /// Next id based on the current wall clock
    pub fn next_id(&mut self) -> TodoId {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_ms: i64) -> TodoId {
        let id = match self.last {
            Some(last) if now_ms <= last => match last.checked_add(1) {
                Some(next) => next,
                None => {
                    tracing::warn!("Todo ids exhausted at {}, restarting from the clock", last);
                    now_ms
                }
            },
            _ => now_ms,
        };
        self.last = Some(id);
        TodoId(id)
    }
}
