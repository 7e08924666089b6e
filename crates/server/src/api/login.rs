use dioxus::prelude::*;

/// Terminate the agent's session.
///
/// Proxies `POST /api/login/user-logout` (no body). Session invalidation is
/// entirely cookie-based on the backend — this function clears nothing
/// locally and the client does not navigate afterwards.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn user_logout() -> Result<(), ServerFnError> {
    use crate::error_convert::{AppErrorExt, ReqwestErrorExt};
    use crate::upstream;

    let req = upstream::client().post(upstream::url("/api/login/user-logout"));
    let resp = upstream::with_session(req)
        .send()
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if !resp.status().is_success() {
        return Err(upstream::error_from_response(resp)
            .await
            .into_server_fn_error());
    }
    Ok(())
}
