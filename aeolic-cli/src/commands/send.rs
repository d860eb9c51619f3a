//! `aeolic send` — render a template and post it.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use aeolic_client::MessageClient;
use aeolic_core::Settings;
use aeolic_transport::{TransportConfig, UreqTransport};

use super::{DataArgs, TemplateArgs};

/// Arguments for `aeolic send`.
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Template name as registered (file name without suffix by default).
    pub template: String,

    /// Destination channel ID.
    #[arg(long, env = "SLACK_CHANNEL")]
    pub channel: Option<String>,

    /// Bot token.
    #[arg(long, env = "SLACK_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Override the chat.postMessage endpoint.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    #[command(flatten)]
    pub templates: TemplateArgs,

    #[command(flatten)]
    pub data: DataArgs,
}

impl SendArgs {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let token = self
            .token
            .or_else(|| settings.token.clone())
            .context("no API token: pass --token, set SLACK_API_TOKEN, or set token in settings")?;
        let channel = self
            .channel
            .or_else(|| settings.channel.clone())
            .context("no channel: pass --channel, set SLACK_CHANNEL, or set channel in settings")?;
        let endpoint = self.endpoint.unwrap_or_else(|| settings.endpoint.clone());

        let registry = self.templates.load(settings)?;
        let data = self.data.value()?;
        let transport = UreqTransport::new(&TransportConfig::from(&settings.transport));
        let client = MessageClient::new(&token, registry, transport).with_endpoint(endpoint);

        client
            .send(channel.as_str(), &self.template, &data)
            .with_context(|| format!("failed to send '{}' to {channel}", self.template))?;

        println!(
            "{} sent '{}' to {}",
            "✓".green().bold(),
            self.template,
            channel.bold()
        );
        Ok(())
    }
}
