//! YAML settings for the `aeolic` CLI.
//!
//! # Storage layout
//!
//! ```text
//! ~/.aeolic/
//!   config.yaml
//! ```
//!
//! # API pattern
//!
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! A missing settings file is not an error: defaults are returned.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::registry::DEFAULT_SUFFIX;
use crate::types::NamingPolicy;

/// Provider endpoint used when settings do not override it.
pub const DEFAULT_ENDPOINT: &str = "https://slack.com/api/chat.postMessage";

/// Contents of `~/.aeolic/config.yaml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
    pub template_suffix: String,
    pub naming: NamingPolicy,
    pub endpoint: String,
    pub transport: TransportSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            token: None,
            channel: None,
            template_dir: None,
            template_suffix: DEFAULT_SUFFIX.to_owned(),
            naming: NamingPolicy::default(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            transport: TransportSettings::default(),
        }
    }
}

/// Connection tuning for the HTTP transport, in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportSettings {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_idle_connections: usize,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            connect_timeout_secs: 15,
            max_idle_connections: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `<home>/.aeolic/config.yaml` — pure, no I/O.
pub fn settings_path_at(home: &Path) -> PathBuf {
    home.join(".aeolic").join("config.yaml")
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load settings from an explicit file path; defaults if the file is absent.
pub fn load_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load `<home>/.aeolic/config.yaml`.
pub fn load_at(home: &Path) -> Result<Settings, SettingsError> {
    load_from(&settings_path_at(home))
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Settings, SettingsError> {
    load_at(&home()?)
}

fn home() -> Result<PathBuf, SettingsError> {
    dirs::home_dir().ok_or(SettingsError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
