//! Error types for aeolic-client.

use thiserror::Error;

use aeolic_core::LoadError;
use aeolic_renderer::RenderError;
use aeolic_transport::{ApiError, CallError};

/// All errors that can arise from [`crate::MessageClient`] operations.
///
/// Everything except `Call` happens before any request is sent.
#[derive(Debug, Error)]
pub enum SendError {
    /// Templates could not be loaded at construction.
    #[error("failed to load templates: {0}")]
    Load(#[from] LoadError),

    #[error("template '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: RenderError,
    },

    /// The rendered output is not a JSON object, so `channel` cannot be added.
    #[error("template '{template}' did not render a JSON object: {reason}")]
    Envelope { template: String, reason: String },

    #[error("failed to serialize envelope for template '{template}': {source}")]
    Serialize {
        template: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request went out and was classified as a failure.
    #[error("sending template '{template}' failed: {source}")]
    Call {
        template: String,
        #[source]
        source: CallError,
    },
}

impl SendError {
    /// The provider's error, if the API rejected the message.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            SendError::Call {
                source: CallError::Api(api),
                ..
            } => Some(api),
            _ => None,
        }
    }

    /// Name of the template involved, when the failure is tied to one.
    pub fn template(&self) -> Option<&str> {
        match self {
            SendError::Load(_) => None,
            SendError::Render { template, .. }
            | SendError::Envelope { template, .. }
            | SendError::Serialize { template, .. }
            | SendError::Call { template, .. } => Some(template),
        }
    }
}
