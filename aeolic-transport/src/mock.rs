//! In-memory [`Transport`] double that records requests.
//!
//! Enabled for this crate's own tests and, for other crates, through the
//! `mock` feature.

use std::io;
use std::sync::{Mutex, MutexGuard};

use crate::error::TransportError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

#[derive(Debug)]
enum Outcome {
    Respond(HttpResponse),
    Fail(io::ErrorKind, String),
}

/// Returns the same canned response (or failure) for every request.
#[derive(Debug)]
pub struct MockTransport {
    outcome: Outcome,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    /// Answers `200 OK` with no body.
    pub fn new() -> Self {
        Self::responding(HttpResponse::new(200))
    }

    pub fn responding(response: HttpResponse) -> Self {
        MockTransport {
            outcome: Outcome::Respond(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails every request with an `io::Error` of `kind`.
    pub fn failing(kind: io::ErrorKind, message: impl Into<String>) -> Self {
        MockTransport {
            outcome: Outcome::Fail(kind, message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request seen so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.lock().last().cloned()
    }

    pub fn calls(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<HttpRequest>> {
        self.requests.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.lock().push(request);
        match &self.outcome {
            Outcome::Respond(response) => Ok(response.clone()),
            Outcome::Fail(kind, message) => {
                Err(TransportError::new(io::Error::new(*kind, message.clone())))
            }
        }
    }
}
