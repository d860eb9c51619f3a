//! Error types for aeolic-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading templates from storage.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The template directory does not exist.
    #[error("template directory not found at {path}")]
    NotFound { path: PathBuf },

    /// Failure reading the directory listing or a single template file.
    #[error("failed to read template source at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// All errors that can arise from settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.aeolic/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

pub(crate) fn load_io_err(path: impl Into<PathBuf>, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.into(),
        source,
    }
}
