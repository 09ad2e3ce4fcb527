// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! One-shot subcommands
//!
//! Each command runs against the session context and reports to `out`.

use std::io::Write;

use crate::cli::Commands;
use crate::context::TodoContext;
use crate::error::{Result, TodoError};
use crate::todo::{Todo, TodoDraft, TodoId};

/// Run a non-interactive subcommand
pub fn run_command(command: Commands, context: &TodoContext, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Tui => Err(TodoError::InvalidInput(
            "the interactive list cannot run as a one-shot command".to_string(),
        )),
        Commands::List => list(context, out),
        Commands::Add(args) => add(context, &args.joined(), out),
        Commands::Toggle(args) => toggle(context, args.id, out),
        Commands::Edit(args) => edit(context, args.id, &args.joined(), out),
        Commands::Delete(args) => delete(context, args.id, out),
        Commands::ClearCompleted => {
            let removed = context.clear_completed();
            writeln!(out, "Cleared {} completed", removed)?;
            Ok(())
        }
    }
}

/// Format one todo as a list line
pub fn format_todo(todo: &Todo) -> String {
    let check = if todo.completed { "x" } else { " " };
    format!("[{}] {} {}", check, todo.id, todo.text)
}

fn list(context: &TodoContext, out: &mut impl Write) -> Result<()> {
    let todos = context.todos();
    if todos.is_empty() {
        writeln!(out, "No todos.")?;
        return Ok(());
    }
    for todo in todos.iter() {
        writeln!(out, "{}", format_todo(todo))?;
    }
    Ok(())
}

fn add(context: &TodoContext, text: &str, out: &mut impl Write) -> Result<()> {
    if text.trim().is_empty() {
        return Err(TodoError::InvalidInput(
            "todo text must not be empty".to_string(),
        ));
    }
    let id = context.add_todo(TodoDraft::new(text));
    writeln!(out, "Added {}", id)?;
    Ok(())
}

/// Look up `id`, printing a notice when it is unknown
fn existing(context: &TodoContext, id: TodoId, out: &mut impl Write) -> Result<Option<Todo>> {
    let todo = context.get(id);
    if todo.is_none() {
        writeln!(out, "No todo with id {}", id)?;
    }
    Ok(todo)
}

fn toggle(context: &TodoContext, id: TodoId, out: &mut impl Write) -> Result<()> {
    if existing(context, id, out)?.is_some() {
        context.toggle_complete(id);
        if let Some(todo) = context.get(id) {
            writeln!(out, "{}", format_todo(&todo))?;
        }
    }
    Ok(())
}

fn edit(context: &TodoContext, id: TodoId, text: &str, out: &mut impl Write) -> Result<()> {
    if text.trim().is_empty() {
        return Err(TodoError::InvalidInput(
            "todo text must not be empty".to_string(),
        ));
    }
    if let Some(todo) = existing(context, id, out)? {
        let edited = todo.with_text(text);
        context.update_todo(id, edited.clone());
        writeln!(out, "{}", format_todo(&edited))?;
    }
    Ok(())
}

fn delete(context: &TodoContext, id: TodoId, out: &mut impl Write) -> Result<()> {
    if existing(context, id, out)?.is_some() {
        context.delete_todo(id);
        writeln!(out, "Deleted {}", id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{EditArgs, IdArgs, TextArgs};

    fn run(context: &TodoContext, command: Commands) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run_command(command, context, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn text(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_list_empty() {
        let ctx = TodoContext::default();
        let (result, out) = run(&ctx, Commands::List);
        assert!(result.is_ok());
        assert_eq!(out, "No todos.\n");
    }

    #[test]
    fn test_add_joins_words_and_lists() {
        let ctx = TodoContext::default();
        let (result, out) = run(
            &ctx,
            Commands::Add(TextArgs {
                text: text(&["buy", "milk"]),
            }),
        );
        assert!(result.is_ok());
        assert!(out.starts_with("Added "));

        let (_, out) = run(&ctx, Commands::List);
        let id = ctx.todos()[0].id;
        assert_eq!(out, format!("[ ] {} buy milk\n", id));
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let ctx = TodoContext::default();
        let (result, _) = run(&ctx, Commands::Add(TextArgs { text: text(&[" "]) }));
        assert!(matches!(result, Err(TodoError::InvalidInput(_))));
        assert!(ctx.todos().is_empty());
    }

    #[test]
    fn test_toggle_and_delete() {
        let ctx = TodoContext::default();
        let id = ctx.add_todo(TodoDraft::new("walk dog"));

        let (_, out) = run(&ctx, Commands::Toggle(IdArgs { id }));
        assert!(out.starts_with("[x]"));
        assert!(ctx.get(id).unwrap().completed);

        let (_, out) = run(&ctx, Commands::Delete(IdArgs { id }));
        assert_eq!(out, format!("Deleted {}\n", id));
        assert!(ctx.todos().is_empty());
    }

    #[test]
    fn test_edit_keeps_completion() {
        let ctx = TodoContext::default();
        let id = ctx.add_todo(TodoDraft::new("old"));
        ctx.toggle_complete(id);

        let (result, _) = run(
            &ctx,
            Commands::Edit(EditArgs {
                id,
                text: text(&["new", "text"]),
            }),
        );
        assert!(result.is_ok());
        let todo = ctx.get(id).unwrap();
        assert_eq!(todo.text, "new text");
        assert!(todo.completed);
    }

    #[test]
    fn test_unknown_id_prints_notice() {
        let ctx = TodoContext::default();
        ctx.add_todo(TodoDraft::new("keep"));
        let ghost = TodoId::from_raw(1);

        let (result, out) = run(&ctx, Commands::Delete(IdArgs { id: ghost }));
        assert!(result.is_ok());
        assert_eq!(out, "No todo with id 1\n");
        assert_eq!(ctx.todos().len(), 1);
    }

    #[test]
    fn test_clear_completed() {
        let ctx = TodoContext::default();
        let id = ctx.add_todo(TodoDraft::new("done"));
        ctx.add_todo(TodoDraft::new("open"));
        ctx.toggle_complete(id);

        let (_, out) = run(&ctx, Commands::ClearCompleted);
        assert_eq!(out, "Cleared 1 completed\n");
        assert_eq!(ctx.todos().len(), 1);
    }

    #[test]
    fn test_tui_is_not_a_one_shot_command() {
        let ctx = TodoContext::default();
        let (result, _) = run(&ctx, Commands::Tui);
        assert!(result.is_err());
    }
}
