//! # aeolic-client
//!
//! Render a named template and post it to Slack's `chat.postMessage`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use std::path::Path;
//!
//! use aeolic_client::MessageClient;
//!
//! fn notify(token: &str) -> Result<(), aeolic_client::SendError> {
//!     let client = MessageClient::from_dir(token, Path::new("templates"))?;
//!     client.send(
//!         "C0123456",
//!         "basic",
//!         &HashMap::from([("url_link", "https://example.com"), ("user_name", "ada")]),
//!     )
//! }
//! ```

pub mod client;
pub mod envelope;
pub mod error;

pub use client::{MessageClient, DEFAULT_ENDPOINT};
pub use envelope::Envelope;
pub use error::SendError;
