// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! UI rendering for the TUI
//!
//! Handles layout and rendering of the form and the list using ratatui.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{App, Focus};
use super::item::ItemMode;
use crate::todo::Todo;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Form
            Constraint::Min(0),    // List
            Constraint::Length(3), // Status/Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], app);
    draw_form(frame, chunks[1], app);
    draw_list(frame, chunks[2], app);
    draw_status(frame, chunks[3], app);
}

/// Draw the title bar
fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let appearance = &app.settings.appearance;
    let title = if appearance.show_counter {
        format!(
            " {} ({}/{}) ",
            appearance.title,
            app.context.completed_count(),
            app.todos().len()
        )
    } else {
        format!(" {} ", appearance.title)
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let title_text = Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    frame.render_widget(title_text, area);
}

fn pane_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw the new-todo form
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Form;
    let block = Block::default()
        .title(" New todo ")
        .borders(Borders::ALL)
        .border_style(pane_border(focused));

    let text = if focused {
        format!("{}_", app.form.draft)
    } else if app.form.draft.is_empty() {
        "Write todo...".to_string()
    } else {
        app.form.draft.clone()
    };
    let style = if focused || !app.form.draft.is_empty() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    frame.render_widget(Paragraph::new(text).style(style).block(block), area);
}

/// Render one row of the list
fn todo_line(todo: &Todo, mode: Option<&ItemMode>, selected: bool) -> ListItem<'static> {
    let prefix = if selected { "▶ " } else { "  " };
    let check = if todo.completed { "[x]" } else { "[ ]" };

    let (text, mut style) = match mode {
        Some(ItemMode::Editing { buffer }) => (
            format!("{}_", buffer),
            Style::default().fg(Color::Yellow),
        ),
        _ if todo.completed => (
            todo.text.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        ),
        _ => (todo.text.clone(), Style::default()),
    };
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }

    ListItem::new(Line::from(vec![
        Span::raw(format!("{}{} ", prefix, check)),
        Span::styled(text, style),
    ]))
}

/// First row to draw so that `selected` stays on screen
fn scroll_offset(selected: usize, visible_height: usize, total: usize) -> usize {
    if selected < visible_height / 2 {
        0
    } else if selected + visible_height / 2 >= total {
        total.saturating_sub(visible_height)
    } else {
        selected.saturating_sub(visible_height / 2)
    }
}

/// Draw the todo list in stored order
fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::List;
    let block = Block::default()
        .title(" Todos ")
        .borders(Borders::ALL)
        .border_style(pane_border(focused));

    let todos = app.todos();
    if todos.is_empty() {
        let empty = Paragraph::new("Nothing to do yet. Type above and press Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = block.inner(area).height as usize;
    let scroll = scroll_offset(app.selected, visible_height, todos.len());

    let items: Vec<ListItem> = todos
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible_height)
        .map(|(i, todo)| {
            let mode = app.item(todo.id).map(|view| &view.mode);
            todo_line(todo, mode, focused && i == app.selected)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Draw the status bar
fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(ref msg) = app.status_message {
        let color = if app.status_is_error {
            Color::Red
        } else {
            Color::Green
        };
        (msg.clone(), Style::default().fg(color))
    } else {
        let help = match app.focus {
            Focus::Form => "Enter: Add | Tab: List | Ctrl+C: Quit",
            Focus::List if app.editing_selected() => "Enter: Save | Esc: Cancel",
            Focus::List => "Space: Toggle | e: Edit | d: Delete | Tab: Form | q: Quit | ?: Help",
        };
        (help.to_string(), Style::default().fg(Color::DarkGray))
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let status = Paragraph::new(format!(" {} ", text))
        .style(style)
        .block(block);

    frame.render_widget(status, area);
}
