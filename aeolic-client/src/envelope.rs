//! The JSON body posted to `chat.postMessage`.
//!
//! The rendered template must be a JSON object (typically `{"blocks": [...]}`
//! or `{"text": "..."}`); `channel` is injected as a top-level field. A
//! `channel` written in the template itself is replaced.

use serde::Serialize;
use serde_json::{Map, Value};

use aeolic_core::Channel;

use crate::error::SendError;

/// Channel plus the rendered message fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub channel: Channel,
    #[serde(flatten)]
    pub content: Map<String, Value>,
}

impl Envelope {
    /// Parse the output of `template` and attach `channel`.
    pub fn hydrate(template: &str, channel: Channel, rendered: &[u8]) -> Result<Self, SendError> {
        let value: Value =
            serde_json::from_slice(rendered).map_err(|e| SendError::Envelope {
                template: template.to_owned(),
                reason: e.to_string(),
            })?;
        let Value::Object(mut content) = value else {
            return Err(SendError::Envelope {
                template: template.to_owned(),
                reason: "top-level value is not an object".to_owned(),
            });
        };
        content.remove("channel");
        Ok(Envelope { channel, content })
    }

    pub fn to_vec(&self, template: &str) -> Result<Vec<u8>, SendError> {
        serde_json::to_vec(self).map_err(|e| SendError::Serialize {
            template: template.to_owned(),
            source: e,
        })
    }
}
