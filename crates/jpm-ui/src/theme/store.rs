//! File-backed preference storage.
//!
//! Preferences live in `preferences.json` inside a data directory, as a flat
//! JSON object of string values keyed by storage key:
//!
//! ```json
//! { "vite-ui-theme": "dark" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Theme;
use crate::error::UiResult;

const PREFERENCES_FILE: &str = "preferences.json";

/// Persists theme selections across sessions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store backed by `preferences.json` in `dir`. Nothing is touched on disk
    /// until the first [`save`](Self::save).
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(PREFERENCES_FILE),
        }
    }

    /// Path of the preferences file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the theme stored under `key`.
    ///
    /// A missing file or key yields `None`, as does a value that names no
    /// known theme.
    pub fn load(&self, key: &str) -> UiResult<Option<Theme>> {
        let entries = self.read_entries()?;
        let Some(raw) = entries.get(key) else {
            tracing::debug!(key, path = ?self.path, "No stored theme");
            return Ok(None);
        };

        match raw.parse::<Theme>() {
            Ok(theme) => {
                tracing::debug!(key, %theme, "Loaded stored theme");
                Ok(Some(theme))
            }
            Err(e) => {
                tracing::warn!(key, "Ignoring stored theme: {}", e);
                Ok(None)
            }
        }
    }

    /// Stores `theme` under `key`, keeping any other entries in the file.
    pub fn save(&self, key: &str, theme: Theme) -> UiResult<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), theme.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;

        tracing::debug!(key, %theme, path = ?self.path, "Saved theme");
        Ok(())
    }

    fn read_entries(&self) -> UiResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}
