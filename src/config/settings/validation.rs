// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{Result, TodoError};
use crate::storage::validate_key;

use super::Settings;

impl Settings {
    /// Check that the settings can be used to open a session.
    pub fn validate(&self) -> Result<()> {
        validate_key(&self.storage.slot)
            .map_err(|e| TodoError::Config(format!("storage.slot: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_slot_with_separator_is_invalid() {
        let mut settings = Settings::default();
        settings.storage.slot = "a/b".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("storage.slot"));
    }
}
