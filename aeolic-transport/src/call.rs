//! `call` — issue one request and classify the response.

use http::Method;
use serde::Deserialize;

use crate::error::{ApiError, CallError};
use crate::headers::{merge, HeaderSet};
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Where the provider documents in-band error codes.
pub const ERROR_DOCS_URL: &str = "https://api.slack.com/methods/chat.postMessage#errors";

/// The provider's in-band status convention for 2xx bodies.
#[derive(Debug, Default, Deserialize)]
struct InBandStatus {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: String,
}

/// Send `method url` with `body` and the merged `headers`, then classify.
///
/// 1. Transport failure → [`CallError::Transport`], untouched.
/// 2. Status >= 400 → [`ApiError`] with that status; the body is never read.
/// 3. No body → success.
/// 4. Body decoded as `{ok, error}`; undecodable → [`CallError::Decode`].
/// 5. `ok: false` → [`ApiError`] 400 Bad Request carrying `error`, whatever
///    the real status was.
pub fn call<T>(
    url: &str,
    method: Method,
    body: Option<Vec<u8>>,
    transport: &T,
    headers: &[&HeaderSet],
) -> Result<HttpResponse, CallError>
where
    T: Transport + ?Sized,
{
    let request = HttpRequest {
        method,
        url: url.to_owned(),
        headers: merge(headers),
        body,
    };

    tracing::debug!(method = %request.method, url, "dispatching request");
    let response = transport.execute(request)?;

    if response.status >= 400 {
        tracing::warn!(status = response.status, url, "request rejected by status");
        return Err(ApiError::from_status(response.status).into());
    }

    let Some(body) = response.body.as_deref() else {
        return Ok(response);
    };

    let status: InBandStatus = serde_json::from_slice(body).map_err(CallError::Decode)?;
    if status.ok {
        return Ok(response);
    }

    tracing::warn!(status = response.status, error = %status.error, url, "API reported failure");
    Err(ApiError::in_band(status.error, ERROR_DOCS_URL).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;

    #[test]
    fn ok_true_is_success() {
        let mock = MockTransport::responding(HttpResponse::new(200).with_body(r#"{"ok":true}"#));
        let resp = call("u", Method::POST, None, &mock, &[]).expect("ok");
        assert_eq!(resp.status, 200);
    }

    #[test]
    fn missing_ok_field_counts_as_failure() {
        let mock = MockTransport::responding(HttpResponse::new(200).with_body("{}"));
        let err = call("u", Method::POST, None, &mock, &[]).unwrap_err();
        assert!(matches!(err, CallError::Api(ref api) if api.message.is_empty()));
    }

    #[test]
    fn non_json_body_is_decode_error() {
        let mock = MockTransport::responding(HttpResponse::new(200).with_body("ok"));
        let err = call("u", Method::POST, None, &mock, &[]).unwrap_err();
        assert!(matches!(err, CallError::Decode(_)));
    }
}
