// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Todo store
//!
//! Owns the canonical ordered collection of todos. Every mutation builds a
//! new snapshot rather than editing the current one in place, then publishes
//! it to the registered observers in registration order.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::todo::{IdGenerator, Todo, TodoDraft, TodoId};

/// The full ordered collection at a point in time, newest first
pub type Snapshot = Arc<[Todo]>;

/// Receives every snapshot the store publishes
pub trait SnapshotObserver {
    fn on_snapshot(&mut self, todos: &Snapshot);
}

impl<F> SnapshotObserver for F
where
    F: FnMut(&Snapshot),
{
    fn on_snapshot(&mut self, todos: &Snapshot) {
        self(todos)
    }
}

/// In-memory todo collection with snapshot publication
pub struct TodoStore {
    todos: Snapshot,
    ids: IdGenerator,
    observers: Vec<Box<dyn SnapshotObserver>>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.todos)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl TodoStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            todos: Arc::from(Vec::new()),
            ids: IdGenerator::new(),
            observers: Vec::new(),
        }
    }

    /// Register an observer; it sees every snapshot published from now on
    pub fn subscribe(&mut self, observer: impl SnapshotObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.todos)
    }

    /// Find a todo by id
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of completed todos
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Seed the collection from previously stored data.
    ///
    /// An empty `todos` leaves the current collection alone and publishes
    /// nothing. Repeated ids after the first occurrence get fresh ones.
    pub fn hydrate(&mut self, mut todos: Vec<Todo>) -> bool {
        if todos.is_empty() {
            return false;
        }
        for todo in &todos {
            self.ids.observe(todo.id);
        }
        let mut taken: HashSet<TodoId> = todos.iter().map(|t| t.id).collect();
        let mut seen = HashSet::new();
        for todo in &mut todos {
            if !seen.insert(todo.id) {
                let fresh = next_free_id(&mut self.ids, |id| taken.contains(&id));
                tracing::warn!("Stored todo id {} is repeated, reassigned to {}", todo.id, fresh);
                todo.id = fresh;
                taken.insert(fresh);
                seen.insert(fresh);
            }
        }
        tracing::debug!("Hydrating store with {} todos", todos.len());
        self.replace(todos);
        true
    }

    /// Prepend a new todo built from `draft` and return its id
    pub fn add(&mut self, draft: TodoDraft) -> TodoId {
        let todos = &self.todos;
        let id = next_free_id(&mut self.ids, |id| todos.iter().any(|t| t.id == id));
        let mut next = Vec::with_capacity(self.todos.len() + 1);
        next.push(Todo::from_draft(id, draft));
        next.extend(self.todos.iter().cloned());
        tracing::debug!("Added todo {}", id);
        self.replace(next);
        id
    }

    /// Replace the todo matching `id` with `replacement`, keeping its position
    pub fn update(&mut self, id: TodoId, replacement: Todo) {
        let next = self
            .todos
            .iter()
            .map(|t| if t.id == id { replacement.clone() } else { t.clone() })
            .collect();
        tracing::debug!("Updated todo {}", id);
        self.replace(next);
    }

    /// Remove the todo matching `id`
    pub fn delete(&mut self, id: TodoId) {
        let next = self.todos.iter().filter(|t| t.id != id).cloned().collect();
        tracing::debug!("Deleted todo {}", id);
        self.replace(next);
    }

    /// Flip the completion flag of the todo matching `id`
    pub fn toggle_complete(&mut self, id: TodoId) {
        let next = self
            .todos
            .iter()
            .map(|t| if t.id == id { t.toggled() } else { t.clone() })
            .collect();
        tracing::debug!("Toggled todo {}", id);
        self.replace(next);
    }

    /// Remove every completed todo, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let next: Vec<Todo> = self.todos.iter().filter(|t| !t.completed).cloned().collect();
        let removed = self.todos.len() - next.len();
        tracing::debug!("Cleared {} completed todos", removed);
        self.replace(next);
        removed
    }

    /// Publish the current snapshot without changing it
    pub fn publish(&mut self) {
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_snapshot(&snapshot);
        }
    }

    fn replace(&mut self, todos: Vec<Todo>) {
        self.todos = Arc::from(todos);
        self.publish();
    }
}

/// Next generated id that `taken` does not claim
fn next_free_id(ids: &mut IdGenerator, taken: impl Fn(TodoId) -> bool) -> TodoId {
    loop {
        let id = ids.next_id();
        if !taken(id) {
            return id;
        }
    }
}
