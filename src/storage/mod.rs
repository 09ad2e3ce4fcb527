// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Key-value storage backends
//!
//! A string-to-string store in the spirit of browser local storage. Values
//! are opaque text; encoding is the caller's concern.

pub mod filesystem;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{Result, TodoError};

pub use filesystem::FileStorage;

/// Local key-value storage
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Check that a key can name a storage slot
pub fn validate_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(TodoError::Storage("key must not be empty".to_string()));
    }
    if key.contains(['/', '\\']) || key == "." || key == ".." {
        return Err(TodoError::Storage(format!(
            "key '{}' must not contain path separators",
            key
        )));
    }
    Ok(())
}

/// In-process storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
