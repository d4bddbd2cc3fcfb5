//! Navigator settings and their accessor seam.
//!
//! The host owns persistence; the core only reads and writes through an
//! injected [`SettingsStore`]. Two stores are provided: an in-memory one
//! for hosts that persist settings themselves (the usual case, where the
//! host keeps a keyed settings blob and flushes it on its own debounce),
//! and a TOML-file-backed one for standalone embedding.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NavigatorError, Result};
use crate::util::atomic_write;

/// Settings filename for the file-backed store.
pub const SETTINGS_FILENAME: &str = "settings.toml";

/// User-facing navigator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Run a search on every keystroke instead of on explicit request.
    #[serde(default = "default_true")]
    pub incremental_search: bool,
    /// Wrap keyword occurrences in highlight markup when navigating.
    #[serde(default = "default_true")]
    pub highlight_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            incremental_search: true,
            highlight_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NavigatorError::io(format!("Failed to read settings file: {}", path.display()), e)
        })?;

        toml::from_str(&content).map_err(|e| NavigatorError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Save settings to a TOML file using an atomic write.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| NavigatorError::InvalidConfig {
            message: format!("Failed to serialize settings: {e}"),
        })?;

        atomic_write(path, content.as_bytes())
    }

    /// Deserialize from the host's JSON settings blob.
    ///
    /// Missing fields take their defaults, matching how the host seeds a
    /// freshly installed navigator's settings object.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        serde_json::from_value(value.clone()).map_err(|e| NavigatorError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Serialize into a JSON blob for the host to persist.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| NavigatorError::InvalidConfig {
            message: e.to_string(),
        })
    }
}

/// Accessor pair over the host's persisted settings.
///
/// Mutation goes through [`set`](SettingsStore::set) so persistence is
/// triggered by the caller, never by implicit global reads. A store must
/// provide read-after-write consistency in program order; nothing stronger
/// is assumed.
pub trait SettingsStore {
    /// Current settings.
    fn get(&self) -> Settings;

    /// Replace the settings, flushing to the host's persistence.
    fn set(&mut self, settings: Settings) -> Result<()>;
}

/// Store for hosts that own persistence themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemorySettings {
    settings: Settings,
}

impl InMemorySettings {
    /// Create a store seeded with the given settings.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl SettingsStore for InMemorySettings {
    fn get(&self) -> Settings {
        self.settings
    }

    fn set(&mut self, settings: Settings) -> Result<()> {
        self.settings = settings;
        Ok(())
    }
}

/// TOML-file-backed store for standalone embedding.
///
/// Reads hit an in-process copy; writes flush to disk before updating it,
/// so a failed write leaves the observed settings unchanged.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
    settings: Settings,
}

impl FileSettings {
    /// Open a file-backed store, seeding defaults when the file is absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let settings = if path.exists() {
            Settings::load_from(&path)?
        } else {
            Settings::default()
        };
        Ok(Self { path, settings })
    }

    /// Open a store at the default per-user settings path.
    pub fn open_default() -> Result<Self> {
        Self::open(default_settings_path()?)
    }

    /// Path this store persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettings {
    fn get(&self) -> Settings {
        self.settings
    }

    fn set(&mut self, settings: Settings) -> Result<()> {
        settings.save_to(&self.path)?;
        self.settings = settings;
        Ok(())
    }
}

/// Get the default settings path under the user config directory.
pub fn default_settings_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| NavigatorError::InvalidConfig {
        message: "Could not determine user config directory".to_string(),
    })?;

    Ok(config_dir.join("message-navigator").join(SETTINGS_FILENAME))
}

// Default value function for serde
fn default_true() -> bool {
    true
}
