// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input handling for the TUI
//!
//! Handles keyboard input and maps to application actions.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, AppResult, Focus};
use crate::error::Result;

/// Help text shown with `?`
pub const HELP: &str =
    "Tab: Switch pane | ↑↓/jk: Move | Space: Toggle | e: Edit | d: Delete | c: Clear done | q: Quit";

/// Poll for one event and apply it
pub fn handle_input(app: &mut App) -> Result<AppResult> {
    // Poll for events with a small timeout
    if event::poll(Duration::from_millis(100))? {
        return Ok(match event::read()? {
            Event::Key(key) => handle_key(app, key),
            // Resizes and the like only need a redraw
            _ => AppResult::Continue,
        });
    }

    Ok(AppResult::Idle)
}

/// Apply a single key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> AppResult {
    // Only handle key press events (not release)
    if key.kind != KeyEventKind::Press {
        return AppResult::Idle;
    }

    // Check for Ctrl+C to quit from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppResult::Quit;
    }

    match app.focus {
        Focus::Form => handle_form_input(app, key.code),
        Focus::List if app.editing_selected() => handle_editing_input(app, key.code),
        Focus::List => return handle_list_input(app, key.code),
    }

    AppResult::Continue
}

/// Typing into the new-todo form
fn handle_form_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Backspace => app.form.pop(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc | KeyCode::Down => app.toggle_focus(),
        KeyCode::Char(c) => app.form.push(c),
        _ => {}
    }
}

/// Typing into the selected row's edit buffer
fn handle_editing_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.save_edit_selected(),
        KeyCode::Esc => app.cancel_edit_selected(),
        KeyCode::Backspace => {
            if let Some(view) = app.selected_view_mut() {
                view.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(view) = app.selected_view_mut() {
                view.push(c);
            }
        }
        _ => {}
    }
}

/// Navigating the list
fn handle_list_input(app: &mut App, key: KeyCode) -> AppResult {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return AppResult::Quit,

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('a') | KeyCode::Char('i') => {
            app.toggle_focus()
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),

        KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('c') => app.clear_completed(),

        KeyCode::Char('?') => app.set_status(HELP, false),

        _ => {}
    }

    AppResult::Continue
}
