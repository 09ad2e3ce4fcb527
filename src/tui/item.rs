// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Per-item view state
//!
//! Each rendered todo is either being viewed or edited. The edit buffer is
//! local to the view and only reaches the store when saved.

use crate::context::TodoContext;
use crate::todo::Todo;

/// Edit state of one rendered todo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ItemMode {
    #[default]
    Viewing,
    Editing { buffer: String },
}

/// View state for a single todo row
#[derive(Debug, Clone, Default)]
pub struct ItemView {
    pub mode: ItemMode,
}

impl ItemView {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ItemMode::Editing { .. })
    }

    /// Text currently in the edit buffer
    pub fn buffer(&self) -> Option<&str> {
        match &self.mode {
            ItemMode::Editing { buffer } => Some(buffer),
            ItemMode::Viewing => None,
        }
    }

    /// Switch to editing, seeded with the todo's text.
    ///
    /// Completed todos cannot be edited.
    pub fn begin_edit(&mut self, todo: &Todo) -> bool {
        if todo.completed {
            return false;
        }
        self.mode = ItemMode::Editing {
            buffer: todo.text.clone(),
        };
        true
    }

    pub fn cancel_edit(&mut self) {
        self.mode = ItemMode::Viewing;
    }

    pub fn push(&mut self, c: char) {
        if let ItemMode::Editing { buffer } = &mut self.mode {
            buffer.push(c);
        }
    }

    pub fn pop(&mut self) {
        if let ItemMode::Editing { buffer } = &mut self.mode {
            buffer.pop();
        }
    }

    /// Write the edited text back through the context and stop editing.
    ///
    /// Returns false, staying in edit mode, when the buffer is blank.
    pub fn save(&mut self, todo: &Todo, context: &TodoContext) -> bool {
        let ItemMode::Editing { buffer } = &self.mode else {
            return false;
        };
        if buffer.trim().is_empty() {
            return false;
        }
        context.update_todo(todo.id, todo.with_text(buffer.as_str()));
        self.mode = ItemMode::Viewing;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::TodoDraft;

    fn context_with(text: &str) -> (TodoContext, Todo) {
        let ctx = TodoContext::default();
        let id = ctx.add_todo(TodoDraft::new(text));
        let todo = ctx.get(id).unwrap();
        (ctx, todo)
    }

    #[test]
    fn test_initial_mode_is_viewing() {
        let view = ItemView::default();
        assert_eq!(view.mode, ItemMode::Viewing);
        assert!(view.buffer().is_none());
    }

    #[test]
    fn test_edit_and_save() {
        let (ctx, todo) = context_with("buy milk");
        let mut view = ItemView::default();

        assert!(view.begin_edit(&todo));
        assert_eq!(view.buffer(), Some("buy milk"));
        for _ in 0.."milk".len() {
            view.pop();
        }
        for c in "bread".chars() {
            view.push(c);
        }

        assert!(view.save(&todo, &ctx));
        assert!(!view.is_editing());
        let saved = ctx.get(todo.id).unwrap();
        assert_eq!(saved.text, "buy bread");
        assert!(!saved.completed);
    }

    #[test]
    fn test_cancel_discards_buffer() {
        let (ctx, todo) = context_with("keep me");
        let mut view = ItemView::default();
        view.begin_edit(&todo);
        view.push('!');
        view.cancel_edit();

        assert!(!view.is_editing());
        assert_eq!(ctx.get(todo.id).unwrap().text, "keep me");
    }

    #[test]
    fn test_completed_todo_cannot_be_edited() {
        let (ctx, todo) = context_with("done");
        ctx.toggle_complete(todo.id);
        let todo = ctx.get(todo.id).unwrap();

        let mut view = ItemView::default();
        assert!(!view.begin_edit(&todo));
        assert!(!view.is_editing());
    }

    #[test]
    fn test_blank_edit_is_not_saved() {
        let (ctx, todo) = context_with("x");
        let mut view = ItemView::default();
        view.begin_edit(&todo);
        view.pop();

        assert!(!view.save(&todo, &ctx));
        assert!(view.is_editing());
        assert_eq!(ctx.get(todo.id).unwrap().text, "x");
    }

    #[test]
    fn test_save_while_viewing_does_nothing() {
        let (ctx, todo) = context_with("x");
        let mut view = ItemView::default();
        assert!(!view.save(&todo, &ctx));
    }
}
