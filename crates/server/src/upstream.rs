//! Thin HTTP layer over the external RC backend.
//!
//! Every server function goes through here: one shared client, the caller's
//! session cookie forwarded as-is, and upstream failures normalized into
//! `AppError`s. The backend reports errors as a JSON body with a `message`
//! field — on binary endpoints that body arrives as raw bytes and has to be
//! decoded before it is any use to the UI.

use shared_types::AppError;
use std::sync::OnceLock;

use crate::config;

static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Shared reqwest client (connection pooling, no local timeouts).
pub fn client() -> &'static reqwest::Client {
    CLIENT.get_or_init(reqwest::Client::new)
}

/// Absolute URL for an upstream path.
pub fn url(path: &str) -> String {
    format!("{}{}", config::backend_url(), path)
}

/// The caller's `Cookie` header, if the request carries one. The upstream
/// session is cookie-based, so it is forwarded verbatim.
pub fn caller_cookie() -> Option<String> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();
    parts
        .headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

/// Attach the caller's cookie to an outgoing upstream request.
pub fn with_session(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match caller_cookie() {
        Some(cookie) => req.header(reqwest::header::COOKIE, cookie),
        None => req,
    }
}

/// Try to pull a human-readable `message` out of an error body.
///
/// Binary endpoints return their error payloads as bytes; the expected shape
/// is UTF-8 JSON `{"message": "..."}`. Returns None when any decoding step
/// fails.
pub fn decode_error_message(body: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(body).ok()?;
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    value.get("message")?.as_str().map(String::from)
}

/// Build the AppError for a non-success upstream response body.
///
/// A decodable `message` becomes an UpstreamError carrying it; anything else
/// is a DecodeError with a generic message (the raw body is only logged).
pub fn upstream_error(status: reqwest::StatusCode, body: &[u8]) -> AppError {
    match decode_error_message(body) {
        Some(message) => AppError::upstream(message),
        None => {
            tracing::warn!(
                status = %status,
                body_len = body.len(),
                "undecodable error body from RC backend"
            );
            AppError::decode("The RC backend returned an unreadable error. Please try again.")
        }
    }
}

/// Consume a failed response and normalize it into an AppError.
pub async fn error_from_response(resp: reqwest::Response) -> AppError {
    let status = resp.status();
    match resp.bytes().await {
        Ok(body) => upstream_error(status, &body),
        Err(e) => AppError::upstream(format!("RC backend error ({status}): {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;

    #[test]
    fn decodes_json_message_body() {
        let body = br#"{"message":"Insufficient wallet balance"}"#;
        assert_eq!(
            decode_error_message(body).as_deref(),
            Some("Insufficient wallet balance")
        );
    }

    #[test]
    fn rejects_non_utf8_body() {
        assert_eq!(decode_error_message(&[0xff, 0xfe, 0x00]), None);
    }

    #[test]
    fn rejects_non_json_body() {
        assert_eq!(decode_error_message(b"PK\x03\x04 not json"), None);
    }

    #[test]
    fn rejects_json_without_message() {
        assert_eq!(decode_error_message(br#"{"error":"nope"}"#), None);
    }

    #[test]
    fn decodable_body_surfaces_upstream_message() {
        let err = upstream_error(
            reqwest::StatusCode::BAD_REQUEST,
            br#"{"message":"CSV has no rows"}"#,
        );
        assert_eq!(err.kind, AppErrorKind::UpstreamError);
        assert_eq!(err.message, "CSV has no rows");
    }

    #[test]
    fn undecodable_body_becomes_generic_decode_error() {
        let err = upstream_error(reqwest::StatusCode::INTERNAL_SERVER_ERROR, b"\x00\x01\x02");
        assert_eq!(err.kind, AppErrorKind::DecodeError);
        assert!(err.message.contains("Please try again"));
    }
}
