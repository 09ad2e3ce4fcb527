// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for todos
//!
//! Handles loading and saving settings from ~/.todos/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::persistence::DEFAULT_SLOT;

mod io;
mod validation;

/// Main settings structure, stored in ~/.todos/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Where and under which key the list is stored
    #[serde(default)]
    pub storage: StorageConfig,

    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Name of the storage slot holding the list
    #[serde(default = "default_slot")]
    pub slot: String,

    /// Directory for the storage files (defaults to the todos home)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            data_dir: None,
        }
    }
}

/// Appearance settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Heading shown above the list
    #[serde(default = "default_title")]
    pub title: String,

    /// Show the completed/total counter next to the heading
    #[serde(default = "default_true")]
    pub show_counter: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_counter: true,
        }
    }
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_title() -> String {
    "Manage Your Todos".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.storage.slot, "todos");
        assert!(settings.storage.data_dir.is_none());
        assert_eq!(settings.appearance.title, "Manage Your Todos");
        assert!(settings.appearance.show_counter);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"appearance": {"show_counter": false}}"#).unwrap();
        assert_eq!(settings.storage.slot, "todos");
        assert_eq!(settings.appearance.title, "Manage Your Todos");
        assert!(!settings.appearance.show_counter);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_written_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.storage.slot = "work".to_string();
        settings.storage.data_dir = Some(dir.path().join("data"));
        settings.appearance.title = "Work".to_string();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_load_rejects_empty_slot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"storage": {"slot": ""}}"#).unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_data_dir_prefers_configured_value() {
        let mut settings = Settings::default();
        settings.storage.data_dir = Some(PathBuf::from("/tmp/elsewhere"));
        assert_eq!(settings.data_dir(), PathBuf::from("/tmp/elsewhere"));
    }
}
