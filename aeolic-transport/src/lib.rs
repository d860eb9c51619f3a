//! # aeolic-transport
//!
//! HTTP call wrapper for the chat API: header merging, an injectable
//! [`Transport`], and three-tier response classification.
//!
//! | Outcome                                   | Result                     |
//! |-------------------------------------------|----------------------------|
//! | transport failed (DNS, refused, timeout)  | `CallError::Transport`     |
//! | status >= 400                             | `CallError::Api` (status)  |
//! | 2xx, no body                              | `Ok`                       |
//! | 2xx, `{"ok": true}`                       | `Ok`                       |
//! | 2xx, `{"ok": false, "error": "..."}`      | `CallError::Api` (400)     |
//! | 2xx, body is not the `ok`/`error` shape   | `CallError::Decode`        |

pub mod call;
pub mod config;
pub mod error;
pub mod headers;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod transport;

pub use call::{call, ERROR_DOCS_URL};
pub use config::TransportConfig;
pub use error::{ApiError, CallError, TransportError};
pub use headers::{default_headers, merge, HeaderSet};
pub use http::Method;
pub use transport::{HttpRequest, HttpResponse, Transport, UreqTransport};
