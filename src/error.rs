// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for todos
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for todos operations
#[derive(Error, Debug)]
pub enum TodoError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Terminal UI errors
    #[error("TUI error: {0}")]
    Tui(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for todos operations
pub type Result<T> = std::result::Result<T, TodoError>;
