//! `aeolic templates` — list registered templates.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use aeolic_core::{Settings, TemplateRegistry};

use super::TemplateArgs;

/// Arguments for `aeolic templates`.
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    #[command(flatten)]
    pub templates: TemplateArgs,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl TemplatesArgs {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let registry = self.templates.load(settings)?;
        let rows = rows(&registry);

        if self.json {
            let out = serde_json::to_string_pretty(&rows).context("failed to format templates")?;
            println!("{out}");
            return Ok(());
        }

        if rows.is_empty() {
            println!("{} no templates found", "■".yellow().bold());
            return Ok(());
        }

        let count = rows.len();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!("{} {count} template(s)", "■".green().bold());
        Ok(())
    }
}

#[derive(Debug, Serialize, Tabled)]
struct TemplateRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "bytes")]
    bytes: usize,
    #[tabled(rename = "lines")]
    lines: usize,
}

fn rows(registry: &TemplateRegistry) -> Vec<TemplateRow> {
    registry
        .iter()
        .map(|(name, source)| TemplateRow {
            name: name.to_string(),
            bytes: source.len(),
            lines: source.lines().count(),
        })
        .collect()
}
