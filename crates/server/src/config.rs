use std::sync::OnceLock;

static BACKEND_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Read `RC_BACKEND_URL` from the environment and cache it. Safe to call
/// multiple times — only the first call has effect.
pub fn load() {
    BACKEND_URL.get_or_init(|| match std::env::var("RC_BACKEND_URL") {
        Ok(url) => {
            let url = url.trim_end_matches('/').to_string();
            tracing::info!(url = %url, "using RC backend");
            url
        }
        Err(_) => {
            tracing::warn!(
                "RC_BACKEND_URL not set — defaulting to {DEFAULT_BACKEND_URL}"
            );
            DEFAULT_BACKEND_URL.to_string()
        }
    });
}

/// Base URL of the upstream RC backend. Returns the default if `load()`
/// hasn't been called yet (safe fallback).
pub fn backend_url() -> &'static str {
    BACKEND_URL.get().map(String::as_str).unwrap_or(DEFAULT_BACKEND_URL)
}
