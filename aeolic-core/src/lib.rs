//! Aeolic core library — domain types, template registry loading, settings.
//!
//! Public API surface:
//! - [`types`] — newtypes and the template [`NamingPolicy`]
//! - [`error`] — [`LoadError`], [`SettingsError`]
//! - [`registry`] — in-memory [`TemplateRegistry`] and the directory loader
//! - [`settings`] — YAML settings for the CLI

pub mod error;
pub mod registry;
pub mod settings;
pub mod types;

pub use error::{LoadError, SettingsError};
pub use registry::{load_dir, TemplateRegistry, DEFAULT_SUFFIX};
pub use settings::{Settings, TransportSettings, DEFAULT_ENDPOINT};
pub use types::{Channel, NamingPolicy, TemplateName};
