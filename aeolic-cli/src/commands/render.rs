//! `aeolic render` — show the message body without sending it.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use aeolic_client::Envelope;
use aeolic_core::{Channel, Settings, TemplateRegistry};
use aeolic_renderer::Renderer;

use super::{DataArgs, TemplateArgs};

const PREVIEW_CHANNEL: &str = "preview";

/// Arguments for `aeolic render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    pub template: String,

    /// Channel to place in the envelope (default: settings, then "preview").
    #[arg(long, env = "SLACK_CHANNEL")]
    pub channel: Option<String>,

    #[command(flatten)]
    pub templates: TemplateArgs,

    #[command(flatten)]
    pub data: DataArgs,
}

impl RenderArgs {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let channel = self
            .channel
            .or_else(|| settings.channel.clone())
            .unwrap_or_else(|| PREVIEW_CHANNEL.to_owned());

        let registry = self.templates.load(settings)?;
        let data = self.data.value()?;

        let envelope = preview(registry, channel, &self.template, &data)?;
        let pretty = serde_json::to_string_pretty(&envelope).context("failed to format envelope")?;
        println!("{pretty}");
        Ok(())
    }
}

/// Render and wrap a template the way `send` would, with no transport.
fn preview<D>(
    registry: TemplateRegistry,
    channel: impl Into<Channel>,
    template: &str,
    data: &D,
) -> Result<Envelope>
where
    D: Serialize + ?Sized,
{
    let rendered = Renderer::new(registry)
        .render(template, data)
        .with_context(|| format!("failed to render '{template}'"))?;
    Envelope::hydrate(template, channel.into(), &rendered)
        .with_context(|| format!("failed to build the message for '{template}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> TemplateRegistry {
        [
            ("plain", r#"{"channel": "C-OLD", "text": "hi {{ who }}"}"#),
            ("list", r#"[{"type": "divider"}]"#),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn preview_builds_envelope_offline() {
        let envelope = preview(registry(), "C1", "plain", &json!({ "who": "ada" })).expect("preview");
        let value = serde_json::to_value(&envelope).expect("json");
        assert_eq!(value, json!({ "channel": "C1", "text": "hi ada" }));
    }

    #[test]
    fn preview_reports_render_and_envelope_failures() {
        let err = preview(registry(), "C1", "plain", &json!({})).unwrap_err();
        assert!(format!("{err:#}").contains("who"), "got: {err:#}");

        let err = preview(registry(), "C1", "list", &()).unwrap_err();
        assert!(format!("{err:#}").contains("not an object"), "got: {err:#}");
    }
}
