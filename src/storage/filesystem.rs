// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Filesystem storage backend
//!
//! Stores each key as an individual `<key>.json` file in a directory.

use std::path::PathBuf;

use super::{validate_key, KeyValueStorage};
use crate::error::Result;

/// Filesystem-based key-value storage
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding one file per key
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new filesystem backend rooted at `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Get the full path for a key
    fn item_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let path = self.item_path(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;

        // Ensure directory exists
        if !self.base_path.exists() {
            std::fs::create_dir_all(&self.base_path)?;
        }

        std::fs::write(self.item_path(key), value)?;
        tracing::debug!("Wrote {} bytes to {:?}", value.len(), self.item_path(key));
        Ok(())
    }
}
