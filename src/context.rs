// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Shared todo context
//!
//! A session handle created once at start-up and handed to every view that
//! needs to read or change the todo list. Clones share the same store.

use std::cell::RefCell;
use std::rc::Rc;

use crate::persistence::TodoPersistence;
use crate::storage::KeyValueStorage;
use crate::store::{Snapshot, SnapshotObserver, TodoStore};
use crate::todo::{Todo, TodoDraft, TodoId};

/// Handle exposing the todo list and its mutations
#[derive(Debug, Clone, Default)]
pub struct TodoContext {
    store: Rc<RefCell<TodoStore>>,
}

impl TodoContext {
    /// Wrap an existing store
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    /// Build the session context backed by `persistence`.
    ///
    /// Loads stored todos, seeds the store with them when there are any,
    /// then keeps the slot in sync with every later snapshot. The starting
    /// collection is written once so the slot always reflects the session.
    pub fn initialize<S>(persistence: TodoPersistence<S>) -> Self
    where
        S: KeyValueStorage + 'static,
    {
        let mut store = TodoStore::new();
        store.hydrate(persistence.load());
        store.subscribe(persistence);
        store.publish();
        Self::new(store)
    }

    /// Current snapshot of the list
    pub fn todos(&self) -> Snapshot {
        self.store.borrow().snapshot()
    }

    /// Look up a single todo
    pub fn get(&self, id: TodoId) -> Option<Todo> {
        self.store.borrow().get(id).cloned()
    }

    /// Number of completed todos
    pub fn completed_count(&self) -> usize {
        self.store.borrow().completed_count()
    }

    pub fn add_todo(&self, draft: TodoDraft) -> TodoId {
        self.store.borrow_mut().add(draft)
    }

    pub fn update_todo(&self, id: TodoId, todo: Todo) {
        self.store.borrow_mut().update(id, todo);
    }

    pub fn delete_todo(&self, id: TodoId) {
        self.store.borrow_mut().delete(id);
    }

    pub fn toggle_complete(&self, id: TodoId) {
        self.store.borrow_mut().toggle_complete(id);
    }

    pub fn clear_completed(&self) -> usize {
        self.store.borrow_mut().clear_completed()
    }

    /// Register an observer for future snapshots.
    ///
    /// Observers run while the store is borrowed and must not call back into
    /// the context.
    pub fn subscribe(&self, observer: impl SnapshotObserver + 'static) {
        self.store.borrow_mut().subscribe(observer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::DEFAULT_SLOT;
    use crate::storage::MemoryStorage;
    use std::cell::Cell;

    fn context_over(storage: &MemoryStorage) -> TodoContext {
        TodoContext::initialize(TodoPersistence::new(storage.clone(), DEFAULT_SLOT))
    }

    #[test]
    fn test_initialize_empty_writes_empty_array() {
        let storage = MemoryStorage::new();
        let ctx = context_over(&storage);
        assert!(ctx.todos().is_empty());
        assert_eq!(storage.get_item("todos").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_initialize_restores_previous_session() {
        let storage = MemoryStorage::new();
        {
            let ctx = context_over(&storage);
            ctx.add_todo(TodoDraft::new("first"));
            ctx.add_todo(TodoDraft::new("second"));
        }

        let ctx = context_over(&storage);
        let texts: Vec<_> = ctx.todos().iter().map(|t| t.text.clone()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn test_initialize_recovers_from_garbage() {
        let storage = MemoryStorage::new();
        storage.set_item("todos", "definitely not json").unwrap();
        let ctx = context_over(&storage);
        assert!(ctx.todos().is_empty());
        assert_eq!(storage.get_item("todos").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let storage = MemoryStorage::new();
        let ctx = context_over(&storage);
        let reader = TodoPersistence::new(storage.clone(), DEFAULT_SLOT);

        let id = ctx.add_todo(TodoDraft::new("buy milk"));
        assert_eq!(reader.load().len(), 1);

        ctx.toggle_complete(id);
        assert!(reader.load()[0].completed);

        let edited = ctx.get(id).unwrap().with_text("buy oat milk");
        ctx.update_todo(id, edited);
        assert_eq!(reader.load()[0].text, "buy oat milk");

        ctx.delete_todo(id);
        assert!(reader.load().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let ctx = TodoContext::default();
        let view = ctx.clone();
        ctx.add_todo(TodoDraft::new("shared"));
        assert_eq!(view.todos().len(), 1);
    }

    #[test]
    fn test_subscribe_sees_later_snapshots() {
        let ctx = TodoContext::default();
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        ctx.subscribe(move |_: &Snapshot| sink.set(sink.get() + 1));

        let id = ctx.add_todo(TodoDraft::new("a"));
        ctx.toggle_complete(id);
        assert_eq!(count.get(), 2);
    }
}
