//! # aeolic-renderer
//!
//! Strict Tera rendering of registered message templates.
//!
//! Every variable a template prints or tests in a condition must exist in
//! the supplied data; a missing key is an error, never a blank substitution
//! or a silently skipped branch.
//!
//! ## Usage
//!
//! ```rust
//! use aeolic_core::TemplateRegistry;
//! use aeolic_renderer::Renderer;
//! use serde_json::json;
//!
//! let registry: TemplateRegistry =
//!     [("basic", r#"{ "hello": "{{ hello }}" }"#)].into_iter().collect();
//! let renderer = Renderer::new(registry);
//! let bytes = renderer.render("basic", &json!({ "hello": "world" })).unwrap();
//! assert_eq!(bytes, br#"{ "hello": "world" }"#);
//! ```

pub mod context;
pub mod engine;
pub mod error;
mod strict;

pub use context::build_context;
pub use engine::{render, Renderer};
pub use error::RenderError;
