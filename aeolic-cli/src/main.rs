//! Aeolic — render message templates and post them to Slack.
//!
//! # Usage
//!
//! ```text
//! aeolic send <template> --channel <id> [--data <json> | --data-file <path>] [--templates <dir>]
//! aeolic render <template> [--channel <id>] [--data <json> | --data-file <path>] [--templates <dir>]
//! aeolic templates [--templates <dir>] [--json]
//! ```
//!
//! Token, channel and template directory fall back to `SLACK_API_TOKEN`,
//! `SLACK_CHANNEL` and `SLACK_TEMPLATE_FOLDER`, then to `~/.aeolic/config.yaml`.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use aeolic_core::{settings, Settings};
use commands::{render::RenderArgs, send::SendArgs, templates::TemplatesArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "aeolic",
    version,
    about = "Render message templates and post them to Slack",
    long_about = None,
)]
struct Cli {
    /// Settings file (default: ~/.aeolic/config.yaml).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a template and post it to a channel.
    Send(SendArgs),

    /// Print the JSON envelope a send would post, without sending.
    Render(RenderArgs),

    /// List the templates found in the template directory.
    Templates(TemplatesArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    match cli.command {
        Commands::Send(args) => args.run(&settings),
        Commands::Render(args) => args.run(&settings),
        Commands::Templates(args) => args.run(&settings),
    }
}

fn load_settings(path: Option<&std::path::Path>) -> Result<Settings> {
    match path {
        Some(path) => settings::load_from(path)
            .with_context(|| format!("failed to load settings from '{}'", path.display())),
        None => settings::load().context("failed to load settings"),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
