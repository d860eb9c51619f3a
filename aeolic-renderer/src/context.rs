//! Template context — turns caller data into a tera [`Context`].

use serde::Serialize;
use serde_json::Value;
use tera::Context;

use crate::error::{describe, RenderError};

/// Build the rendering context for template `name` from `data`.
///
/// `data` is serialized to JSON first:
/// - an object becomes the context (its keys are the template variables);
/// - `null` (including `()` and `None`) becomes an empty context;
/// - any other shape is rejected with [`RenderError::Context`].
pub fn build_context<T>(name: &str, data: &T) -> Result<Context, RenderError>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(data)? {
        Value::Null => Ok(Context::new()),
        value @ Value::Object(_) => Context::from_value(value).map_err(|e| RenderError::Context {
            name: name.to_owned(),
            reason: describe(&e),
        }),
        other => Err(RenderError::Context {
            name: name.to_owned(),
            reason: format!("expected an object or null, got {}", kind(&other)),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Deploy {
        service: String,
        version: u32,
    }

    #[test]
    fn struct_fields_become_variables() {
        let ctx = build_context(
            "deploy",
            &Deploy {
                service: "api".to_owned(),
                version: 7,
            },
        )
        .expect("context");
        assert_eq!(ctx.get("service"), Some(&json!("api")));
        assert_eq!(ctx.get("version"), Some(&json!(7)));
    }

    #[test]
    fn map_keys_become_variables() {
        let data = HashMap::from([("hello", "world")]);
        let ctx = build_context("basic", &data).expect("context");
        assert_eq!(ctx.get("hello"), Some(&json!("world")));
    }

    #[test]
    fn unit_is_an_empty_context() {
        let ctx = build_context("static", &()).expect("context");
        assert!(ctx.into_json().as_object().is_some_and(|m| m.is_empty()));
    }

    #[test]
    fn array_is_rejected() {
        let err = build_context("basic", &json!([1, 2])).unwrap_err();
        assert!(matches!(err, RenderError::Context { .. }));
        assert!(err.to_string().contains("an array"));
    }
}
