// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Terminal UI for the todo list
//!
//! Uses ratatui for rendering and crossterm for input handling. The screen
//! is redrawn after each handled event and whenever the store publishes a
//! new snapshot.

pub mod app;
pub mod form;
pub mod input;
pub mod item;
pub mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Settings;
use crate::context::TodoContext;
use crate::error::{Result, TodoError};
use app::{App, AppResult};

/// Run the interactive todo list until the user quits
pub fn run_tui(context: TodoContext, settings: Settings) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(context, settings);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main application loop
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut needs_draw = true;
    loop {
        if app.refresh() || needs_draw {
            draw_frame(terminal, app)?;
        }

        match input::handle_input(app)? {
            AppResult::Continue => needs_draw = true,
            AppResult::Idle => needs_draw = false,
            AppResult::Quit => break,
        }
    }

    Ok(())
}

fn draw_frame<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> Result<()> {
    terminal
        .draw(|f| ui::draw(f, app))
        .map_err(|e| TodoError::Tui(e.to_string()))?;
    Ok(())
}
