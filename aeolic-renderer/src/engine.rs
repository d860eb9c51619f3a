//! Strict tera rendering — [`render`] and the registry-owning [`Renderer`].
//!
//! # Render steps
//!
//! 1. Look the name up in the registry (`TemplateNotFound` if absent).
//! 2. Compile the source into a fresh tera instance, autoescape off.
//! 3. Reject `if`/`elif` conditions that name a missing variable.
//! 4. Render into an in-memory buffer; any missing variable is an error.
//! 5. Hand back the buffer only if rendering completed.

use serde::Serialize;
use tera::Tera;

use aeolic_core::TemplateRegistry;

use crate::context::build_context;
use crate::error::{describe, RenderError};
use crate::strict::missing_condition_variable;

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

/// Render the template registered as `name` against `data`.
///
/// Returns the complete rendered bytes, or an error and no output at all.
pub fn render<T>(name: &str, registry: &TemplateRegistry, data: &T) -> Result<Vec<u8>, RenderError>
where
    T: Serialize + ?Sized,
{
    let source = registry.get(name).ok_or_else(|| RenderError::TemplateNotFound {
        name: name.to_owned(),
    })?;

    let mut tera = Tera::default();
    // Payloads are JSON; HTML escaping would corrupt them.
    tera.autoescape_on(vec![]);
    tera.add_raw_template(name, source)
        .map_err(|e| RenderError::Compile {
            name: name.to_owned(),
            reason: describe(&e),
            template_source: source.to_owned(),
        })?;

    let ctx = build_context(name, data)?;

    // Tera treats a missing name in a condition as false; reject it instead.
    let template = tera.get_template(name).map_err(|e| RenderError::Compile {
        name: name.to_owned(),
        reason: describe(&e),
        template_source: source.to_owned(),
    })?;
    if let Some(ident) = missing_condition_variable(&template.ast, &ctx) {
        return Err(RenderError::Execute {
            name: name.to_owned(),
            reason: format!("Variable `{ident}` not found in context while rendering '{name}'"),
            template_source: source.to_owned(),
        });
    }

    let mut buf = Vec::with_capacity(source.len());
    tera.render_to(name, &ctx, &mut buf)
        .map_err(|e| RenderError::Execute {
            name: name.to_owned(),
            reason: describe(&e),
            template_source: source.to_owned(),
        })?;

    tracing::debug!(template = name, bytes = buf.len(), "rendered template");
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Owns a [`TemplateRegistry`] and renders templates from it.
///
/// The registry is never mutated, so a `Renderer` can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct Renderer {
    registry: TemplateRegistry,
}

impl Renderer {
    pub fn new(registry: TemplateRegistry) -> Self {
        Renderer { registry }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// See [`render`].
    pub fn render<T>(&self, name: &str, data: &T) -> Result<Vec<u8>, RenderError>
    where
        T: Serialize + ?Sized,
    {
        render(name, &self.registry, data)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
