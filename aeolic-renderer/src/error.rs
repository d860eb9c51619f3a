//! Error types for aeolic-renderer.

use thiserror::Error;

/// All errors that can arise from template rendering operations.
///
/// `Compile` and `Execute` carry the template source verbatim so a failure
/// can be traced back to the literal template text.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No template is registered under `name`.
    #[error("template '{name}' does not exist")]
    TemplateNotFound { name: String },

    /// The template source is not valid template syntax.
    #[error("failed to compile template '{name}': {reason}\n{template_source}")]
    Compile {
        name: String,
        reason: String,
        template_source: String,
    },

    /// Rendering failed (missing key, type mismatch in a field access, ...).
    #[error("failed to render template '{name}': {reason}\n{template_source}")]
    Execute {
        name: String,
        reason: String,
        template_source: String,
    },

    /// The data value cannot be used as a template context.
    #[error("invalid render context for template '{name}': {reason}")]
    Context { name: String, reason: String },

    /// JSON serialization error (building the context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Flatten a tera error and all of its causes into one line.
///
/// Tera reports "Failed to render 'x'" at the top and keeps the useful part
/// (which variable was missing) in the source chain.
pub(crate) fn describe(err: &tera::Error) -> String {
    let mut reason = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    reason
}
