// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application state and logic
//!
//! Manages the TUI application state: which pane has focus, the selected
//! row, per-item edit state and the status line.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::Settings;
use crate::context::TodoContext;
use crate::store::Snapshot;
use crate::todo::{Todo, TodoId};
use crate::tui::form::TodoForm;
use crate::tui::item::ItemView;

/// Result of input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppResult {
    /// An event was handled, keep running
    Continue,
    /// No event arrived before the poll timeout
    Idle,
    /// Quit the application
    Quit,
}

/// Which pane receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The new-todo form
    Form,
    /// The todo list
    List,
}

/// Main application state
pub struct App {
    /// Session handle shared with the rest of the program
    pub context: TodoContext,
    pub settings: Settings,
    pub focus: Focus,
    pub form: TodoForm,
    /// View state per rendered todo, keyed by id
    pub items: HashMap<TodoId, ItemView>,
    /// Index of the selected row in the list
    pub selected: usize,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    /// Set by the store subscription whenever a new snapshot is published
    dirty: Rc<Cell<bool>>,
}

impl App {
    /// Create the app and subscribe it to the context's snapshots
    pub fn new(context: TodoContext, settings: Settings) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        context.subscribe(move |_: &Snapshot| flag.set(true));

        Self {
            context,
            settings,
            focus: Focus::Form,
            form: TodoForm::new(),
            items: HashMap::new(),
            selected: 0,
            status_message: None,
            status_is_error: false,
            dirty,
        }
    }

    /// Current list, newest first
    pub fn todos(&self) -> Snapshot {
        self.context.todos()
    }

    /// The todo under the cursor
    pub fn selected_todo(&self) -> Option<Todo> {
        self.todos().get(self.selected).cloned()
    }

    /// View state for `id`; `None` until an edit is first attempted on that row,
    /// after which the entry stays (back in viewing mode) until the row is deleted
    pub fn item(&self, id: TodoId) -> Option<&ItemView> {
        self.items.get(&id)
    }

    /// Whether the selected row is being edited
    pub fn editing_selected(&self) -> bool {
        self.selected_todo()
            .and_then(|t| self.items.get(&t.id))
            .is_some_and(ItemView::is_editing)
    }

    /// Consume the dirty flag, reconciling view state with the latest
    /// snapshot. Returns whether a redraw is due.
    pub fn refresh(&mut self) -> bool {
        if !self.dirty.replace(false) {
            return false;
        }
        let todos = self.todos();
        self.items
            .retain(|id, _| todos.iter().any(|t| t.id == *id));
        if self.selected >= todos.len() {
            self.selected = todos.len().saturating_sub(1);
        }
        true
    }

    pub fn set_status(&mut self, message: &str, is_error: bool) {
        self.status_message = Some(message.to_string());
        self.status_is_error = is_error;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::List,
            Focus::List => Focus::Form,
        };
    }

    pub fn move_up(&mut self) {
        let len = self.todos().len();
        if len == 0 {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = len - 1;
        }
    }

    pub fn move_down(&mut self) {
        let len = self.todos().len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Submit the form; a new todo lands at the top and becomes selected
    pub fn submit_form(&mut self) {
        if self.form.submit(&self.context).is_some() {
            self.selected = 0;
            self.set_status("Todo added", false);
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(todo) = self.selected_todo() {
            self.context.toggle_complete(todo.id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(todo) = self.selected_todo() {
            self.context.delete_todo(todo.id);
            self.items.remove(&todo.id);
            let len = self.todos().len();
            if self.selected >= len && self.selected > 0 {
                self.selected = len.saturating_sub(1);
            }
            self.set_status("Todo deleted", false);
        }
    }

    pub fn clear_completed(&mut self) {
        let removed = self.context.clear_completed();
        self.set_status(&format!("Cleared {} completed", removed), false);
    }

    pub fn begin_edit_selected(&mut self) {
        let Some(todo) = self.selected_todo() else {
            return;
        };
        if self.items.entry(todo.id).or_default().begin_edit(&todo) {
            self.clear_status();
        } else {
            self.set_status("Completed todos can't be edited", true);
        }
    }

    pub fn cancel_edit_selected(&mut self) {
        if let Some(view) = self.selected_view_mut() {
            view.cancel_edit();
        }
    }

    pub fn save_edit_selected(&mut self) {
        let Some(todo) = self.selected_todo() else {
            return;
        };
        let context = self.context.clone();
        if let Some(view) = self.items.get_mut(&todo.id) {
            if view.save(&todo, &context) {
                self.set_status("Todo updated", false);
            }
        }
    }

    /// Edit buffer of the selected row, when it is being edited
    pub fn selected_view_mut(&mut self) -> Option<&mut ItemView> {
        let id = self.selected_todo()?.id;
        self.items.get_mut(&id)
    }
}
