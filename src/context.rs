//! Launch context for JPM Console.
//!
//! Command-line choices are resolved once in `main` and read by the root
//! component when it mounts.
//!
//! ## Usage
//!
//! ```ignore
//! // In main, before launching
//! context::set_launch_config(config);
//!
//! // In App
//! let config = launch_config();
//! ```

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jpm_ui::ThemeStore;

use crate::app::Revision;

static LAUNCH_CONFIG: OnceLock<LaunchConfig> = OnceLock::new();

/// Resolved start-up options
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Where preferences are persisted; `None` disables persistence
    pub data_dir: Option<PathBuf>,
    /// Which scaffold revision to render
    pub revision: Revision,
}

impl LaunchConfig {
    /// Theme store rooted at the data directory, if there is one
    pub fn theme_store(&self) -> Option<ThemeStore> {
        self.data_dir.as_ref().map(ThemeStore::new)
    }
}

/// Default data directory: `{platform data dir}/jpm`
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jpm")
}

/// Name of the directory static files (`/icon.svg`) are served from
const RESOURCE_DIR: &str = "public";

/// Picks the resource directory: `public/` beside the executable when it
/// exists, else `public/` in the source tree.
pub fn resolve_resource_dir(exe: Option<&Path>) -> PathBuf {
    let beside_exe = exe
        .and_then(Path::parent)
        .map(|dir| dir.join(RESOURCE_DIR))
        .filter(|dir| dir.is_dir());

    beside_exe.unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(RESOURCE_DIR))
}

/// Resource directory for the running executable
pub fn resource_dir() -> PathBuf {
    let exe = std::env::current_exe()
        .map_err(|e| tracing::warn!("Cannot locate executable: {}", e))
        .ok();
    resolve_resource_dir(exe.as_deref())
}

/// Records the launch config. Only the first call has any effect.
pub fn set_launch_config(config: LaunchConfig) {
    if LAUNCH_CONFIG.set(config).is_err() {
        tracing::warn!("Launch config already set, ignoring");
    }
}

/// The launch config, or the default when none was recorded.
pub fn launch_config() -> LaunchConfig {
    LAUNCH_CONFIG.get().cloned().unwrap_or_default()
}
