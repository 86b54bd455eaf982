//! Appearance modes and the theme scope.

mod provider;
mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UiError;

pub use provider::*;
pub use store::*;

/// Key under which the selected theme is persisted
pub const DEFAULT_STORAGE_KEY: &str = "vite-ui-theme";

/// Theme used when nothing has been persisted
pub const DEFAULT_THEME: Theme = Theme::Dark;

/// Appearance mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    /// Follow the host's light/dark preference
    System,
}

impl Theme {
    /// Returns the textual form used in markup and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::System => "system",
        }
    }

    /// Resolves `System` against the host preference.
    ///
    /// The result is always `Dark` or `Light`.
    pub fn resolve(self, prefers_dark: bool) -> Theme {
        match self {
            Theme::System if prefers_dark => Theme::Dark,
            Theme::System => Theme::Light,
            other => other,
        }
    }

    /// CSS class applied to the theme scope
    pub fn class(&self, prefers_dark: bool) -> &'static str {
        match self.resolve(prefers_dark) {
            Theme::Light => "light",
            _ => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            "system" => Ok(Theme::System),
            other => Err(UiError::UnknownTheme(other.to_string())),
        }
    }
}
