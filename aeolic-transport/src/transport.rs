//! The [`Transport`] capability and its ureq-backed implementation.

use std::io::Read;
use std::sync::Arc;

use http::Method;

use crate::config::TransportConfig;
use crate::error::{status_text, TransportError};
use crate::headers::HeaderSet;

// ---------------------------------------------------------------------------
// Request / response
// ---------------------------------------------------------------------------

/// One outgoing HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderSet,
    pub body: Option<Vec<u8>>,
}

/// A received HTTP response, body fully read.
///
/// `body` is `None` when the server sent no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderSet,
    pub body: Option<Vec<u8>>,
}

impl HttpResponse {
    /// A response with `status`, no headers and no body.
    pub fn new(status: u16) -> Self {
        HttpResponse {
            status,
            headers: HeaderSet::new(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn status_text(&self) -> &'static str {
        status_text(self.status)
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Executes a single HTTP request.
///
/// Implementations must report every status code as an `Ok` response; only
/// failures to obtain a response at all are `Err`. Timeouts and connection
/// pooling are the implementation's concern.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

// ---------------------------------------------------------------------------
// UreqTransport
// ---------------------------------------------------------------------------

/// Blocking transport over a pooled [`ureq::Agent`].
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new(config: &TransportConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .timeout_connect(config.connect_timeout)
            .max_idle_connections(config.max_idle_connections)
            .max_idle_connections_per_host(config.max_idle_connections_per_host)
            .user_agent(&config.user_agent)
            .build();
        UreqTransport { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&TransportConfig::default())
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req = self.agent.request(request.method.as_str(), &request.url);
        for (name, value) in &request.headers {
            req = req.set(name, value);
        }

        let result = match &request.body {
            Some(body) => req.send_bytes(body),
            None => req.call(),
        };
        // ureq turns >= 400 into an error; classification belongs to the caller.
        let response = match result {
            Ok(response) | Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(err)) => return Err(TransportError::new(err)),
        };

        let status = response.status();
        let mut headers = HeaderSet::new();
        for name in response.headers_names() {
            if let Some(value) = response.header(&name) {
                headers.insert(name, value.to_owned());
            }
        }

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(TransportError::new)?;

        Ok(HttpResponse {
            status,
            headers,
            body: (!body.is_empty()).then_some(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_builder() {
        let resp = HttpResponse::new(200).with_body(r#"{"ok":true}"#);
        assert_eq!(resp.status_text(), "OK");
        assert_eq!(resp.body.as_deref(), Some(br#"{"ok":true}"#.as_slice()));
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        // Port 9 on localhost is reserved (discard) and not listening in CI.
        let transport = UreqTransport::new(&TransportConfig {
            connect_timeout: std::time::Duration::from_secs(2),
            ..TransportConfig::default()
        });
        let err = transport
            .execute(HttpRequest {
                method: Method::POST,
                url: "http://127.0.0.1:9/api".to_owned(),
                headers: HeaderSet::new(),
                body: Some(b"{}".to_vec()),
            })
            .unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
