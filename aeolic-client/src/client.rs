//! [`MessageClient`] — render, wrap, post.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use aeolic_core::{load_dir, Channel, NamingPolicy, TemplateRegistry, DEFAULT_SUFFIX};
use aeolic_renderer::Renderer;
use aeolic_transport::{call, default_headers, HeaderSet, Method, Transport, UreqTransport};

use crate::envelope::Envelope;
use crate::error::SendError;

pub use aeolic_core::DEFAULT_ENDPOINT;

/// Posts rendered templates to the chat API.
///
/// Owns a read-only template registry, the default headers (bearer token
/// and JSON content type) and a [`Transport`]. `send` takes `&self`, so one
/// client can be shared across threads when the transport allows it.
pub struct MessageClient<T = UreqTransport> {
    renderer: Renderer,
    headers: HeaderSet,
    endpoint: String,
    transport: T,
}

impl MessageClient<UreqTransport> {
    /// Load `*.tmpl` files from `dir`, registered without the suffix.
    pub fn from_dir(token: &str, dir: &Path) -> Result<Self, SendError> {
        Self::from_dir_with(token, dir, DEFAULT_SUFFIX, NamingPolicy::StripSuffix)
    }

    /// Load templates from `dir` with an explicit suffix and naming policy.
    pub fn from_dir_with(
        token: &str,
        dir: &Path,
        suffix: &str,
        naming: NamingPolicy,
    ) -> Result<Self, SendError> {
        let registry = load_dir(dir, suffix, naming)?;
        tracing::debug!(dir = %dir.display(), templates = registry.len(), "templates loaded");
        Ok(Self::with_templates(token, registry))
    }

    /// Use an already-built registry (e.g. templates embedded with `include_str!`).
    pub fn with_templates(token: &str, registry: TemplateRegistry) -> Self {
        Self::new(token, registry, UreqTransport::default())
    }
}

impl<T: Transport> MessageClient<T> {
    pub fn new(token: &str, registry: TemplateRegistry, transport: T) -> Self {
        MessageClient {
            renderer: Renderer::new(registry),
            headers: default_headers(token),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            transport,
        }
    }

    /// Swap the transport, keeping templates, token and endpoint.
    pub fn with_transport<U: Transport>(self, transport: U) -> MessageClient<U> {
        MessageClient {
            renderer: self.renderer,
            headers: self.headers,
            endpoint: self.endpoint,
            transport,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn registry(&self) -> &TemplateRegistry {
        self.renderer.registry()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Render `template` and build the envelope for `channel`, without sending.
    pub fn render_envelope<D>(
        &self,
        channel: impl Into<Channel>,
        template: &str,
        data: &D,
    ) -> Result<Envelope, SendError>
    where
        D: Serialize + ?Sized,
    {
        let rendered = self
            .renderer
            .render(template, data)
            .map_err(|e| SendError::Render {
                template: template.to_owned(),
                source: e,
            })?;
        Envelope::hydrate(template, channel.into(), &rendered)
    }

    /// Render `template` with `data` and post it to `channel`.
    ///
    /// Nothing is sent unless rendering and envelope assembly both succeed.
    pub fn send<D>(&self, channel: impl Into<Channel>, template: &str, data: &D) -> Result<(), SendError>
    where
        D: Serialize + ?Sized,
    {
        let envelope = self.render_envelope(channel, template, data)?;
        let body = envelope.to_vec(template)?;

        tracing::debug!(template, channel = %envelope.channel, bytes = body.len(), "sending message");
        call(&self.endpoint, Method::POST, Some(body), &self.transport, &[&self.headers]).map_err(
            |e| SendError::Call {
                template: template.to_owned(),
                source: e,
            },
        )?;

        tracing::info!(template, channel = %envelope.channel, "message delivered");
        Ok(())
    }
}

// Headers hold the bearer token; keep them out of debug output.
impl<T> fmt::Debug for MessageClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageClient")
            .field("endpoint", &self.endpoint)
            .field("templates", &self.renderer.registry().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeolic_transport::mock::MockTransport;
    use aeolic_transport::HttpResponse;
    use serde_json::json;

    fn client(response: HttpResponse) -> MessageClient<MockTransport> {
        let registry: TemplateRegistry =
            [("basic", r#"{ "text": "hello {{ name }}" }"#)].into_iter().collect();
        MessageClient::new("xoxb-test", registry, MockTransport::responding(response))
    }

    #[test]
    fn send_posts_envelope_with_auth() {
        let client = client(HttpResponse::new(200).with_body(r#"{"ok":true}"#));
        client.send("C1", "basic", &json!({ "name": "ada" })).expect("send");

        let req = client.transport().last_request().expect("request");
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url, DEFAULT_ENDPOINT);
        assert_eq!(req.headers["Authorization"], "Bearer xoxb-test");
        assert_eq!(req.headers["Content-Type"], "application/json");
        let body: serde_json::Value = serde_json::from_slice(&req.body.unwrap()).unwrap();
        assert_eq!(body, json!({ "channel": "C1", "text": "hello ada" }));
    }

    #[test]
    fn debug_output_hides_token() {
        let client = client(HttpResponse::new(200));
        let dbg = format!("{client:?}");
        assert!(!dbg.contains("xoxb-test"));
        assert!(dbg.contains("templates: 1"));
    }
}
