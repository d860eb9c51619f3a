pub mod render;
pub mod send;
pub mod templates;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::Value;

use aeolic_core::{load_dir, NamingPolicy, Settings, TemplateRegistry};

// ---------------------------------------------------------------------------
// Shared arguments
// ---------------------------------------------------------------------------

/// Where templates come from.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Template directory (default: `template_dir` from settings).
    #[arg(long = "templates", env = "SLACK_TEMPLATE_FOLDER", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// File suffix that marks a template (default: `.tmpl`).
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Register templates by full file path instead of stripped file name.
    #[arg(long)]
    pub full_path: bool,
}

impl TemplateArgs {
    pub fn load(&self, settings: &Settings) -> Result<TemplateRegistry> {
        let Some(dir) = self.dir.as_ref().or(settings.template_dir.as_ref()) else {
            bail!("no template directory: pass --templates, set SLACK_TEMPLATE_FOLDER, or set template_dir in settings");
        };
        let suffix = self.suffix.as_deref().unwrap_or(&settings.template_suffix);
        let naming = if self.full_path {
            NamingPolicy::FullPath
        } else {
            settings.naming
        };

        let registry = load_dir(dir, suffix, naming)
            .with_context(|| format!("failed to load templates from '{}'", dir.display()))?;
        tracing::debug!(dir = %dir.display(), templates = registry.len(), %naming, "templates loaded");
        Ok(registry)
    }
}

/// Template data, inline or from a file.
#[derive(Args, Debug)]
pub struct DataArgs {
    /// Template data as a JSON object.
    #[arg(long, value_name = "JSON", conflicts_with = "data_file")]
    pub data: Option<String>,

    /// Read template data from a JSON file.
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

impl DataArgs {
    /// Parsed data; `null` when none was given.
    pub fn value(&self) -> Result<Value> {
        if let Some(raw) = &self.data {
            return serde_json::from_str(raw).context("--data is not valid JSON");
        }
        if let Some(path) = &self.data_file {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            return serde_json::from_str(&raw)
                .with_context(|| format!("'{}' is not valid JSON", path.display()));
        }
        Ok(Value::Null)
    }
}
