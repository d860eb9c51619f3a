//! Error types for aeolic-transport.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Failure inside the transport itself (connect, TLS, timeout, body read).
///
/// Wraps whatever the transport produced; `Display` and `source` are the
/// wrapped error's own, so it reaches the caller unchanged.
#[derive(Debug)]
pub struct TransportError(Box<dyn StdError + Send + Sync + 'static>);

impl TransportError {
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        TransportError(err.into())
    }

    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.0
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// A failure reported by the API, either through the HTTP status or inside
/// a 2xx body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status_text} [{status_code}]: {message}")]
pub struct ApiError {
    pub status_code: u16,
    pub status_text: String,
    /// Provider error code (`invalid_blocks`, `channel_not_found`, ...);
    /// empty for HTTP-status failures.
    pub message: String,
    /// Where the provider documents `message`.
    pub context: Option<String>,
}

impl ApiError {
    /// Failure signalled by an HTTP status >= 400.
    pub fn from_status(status_code: u16) -> Self {
        ApiError {
            status_code,
            status_text: status_text(status_code).to_owned(),
            message: String::new(),
            context: None,
        }
    }

    /// `{"ok": false}` inside a 2xx response, reported as 400 Bad Request.
    pub fn in_band(message: impl Into<String>, context: impl Into<String>) -> Self {
        ApiError {
            status_code: 400,
            status_text: status_text(400).to_owned(),
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Whether this error came from a 2xx body rather than the HTTP status.
    pub fn is_in_band(&self) -> bool {
        self.context.is_some()
    }
}

/// Canonical reason phrase for `code`, or `""` for unassigned codes.
pub fn status_text(code: u16) -> &'static str {
    http::StatusCode::from_u16(code)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}

/// Every way [`crate::call`] can fail.
#[derive(Debug, Error)]
pub enum CallError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// A 2xx body that is not the provider's `{ok, error}` shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
