//! Flat-file user profile store.
//!
//! Free-form text accumulated across interactions, one note per line. An
//! absent file loads as the default placeholder text.

use std::fs;
use std::path::Path;

use crate::error::{Result, StrataError};

/// Placeholder content for a profile that has never been written.
const EMPTY_PROFILE: &str = "No profile recorded yet.";

/// Accumulated free-form notes about the user.
#[derive(Debug, Clone)]
pub struct UserProfile {
    text: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            text: EMPTY_PROFILE.to_string(),
        }
    }
}

impl UserProfile {
    /// Load the profile from `path`; an absent file yields the placeholder.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|e| StrataError::StoreReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { text })
    }

    /// Rewrite the profile file at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.text).map_err(|e| StrataError::StoreWriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Append a note about what the user said.
    pub fn record(&mut self, input: &str) {
        self.text.push_str("\nUser said: ");
        self.text.push_str(input);
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
