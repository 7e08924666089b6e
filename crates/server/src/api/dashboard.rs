use dioxus::prelude::*;
use shared_types::DashboardData;

/// Fetch the agent's profile and transaction history.
///
/// Proxies `GET /api/dashboard/get-user-dashboard-data` on the RC backend,
/// forwarding the caller's session cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_user_dashboard_data() -> Result<DashboardData, ServerFnError> {
    use crate::error_convert::{AppErrorExt, ReqwestErrorExt};
    use crate::upstream;

    let req = upstream::client().get(upstream::url("/api/dashboard/get-user-dashboard-data"));
    let resp = upstream::with_session(req)
        .send()
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if !resp.status().is_success() {
        return Err(upstream::error_from_response(resp)
            .await
            .into_server_fn_error());
    }

    let data = resp
        .json::<DashboardData>()
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(data)
}

/// Submit a CSV of vehicle numbers and receive the bulk-RC result archive.
///
/// The file travels from the browser as base64; it is forwarded to
/// `POST /api/dashboard/get-bulk-rc` as multipart field `file`, and the
/// binary ZIP that comes back is re-encoded as base64 for the return trip.
/// A failed upstream call carries its error as a binary JSON body — see
/// `upstream::upstream_error` for how that is surfaced.
#[cfg_attr(feature = "server", tracing::instrument(skip(csv_base64)))]
#[server]
pub async fn get_bulk_rc(file_name: String, csv_base64: String) -> Result<String, ServerFnError> {
    use crate::error_convert::{AppErrorExt, ReqwestErrorExt};
    use crate::upstream;
    use base64::Engine as _;
    use shared_types::AppError;

    let csv_bytes = base64::engine::general_purpose::STANDARD
        .decode(csv_base64.as_bytes())
        .map_err(|_| {
            AppError::bad_request("Uploaded CSV could not be read").into_server_fn_error()
        })?;

    let part = reqwest::multipart::Part::bytes(csv_bytes)
        .file_name(file_name)
        .mime_str("text/csv")
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let req = upstream::client()
        .post(upstream::url("/api/dashboard/get-bulk-rc"))
        .multipart(form);
    let resp = upstream::with_session(req)
        .send()
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if !resp.status().is_success() {
        return Err(upstream::error_from_response(resp)
            .await
            .into_server_fn_error());
    }

    let archive = resp
        .bytes()
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(base64::engine::general_purpose::STANDARD.encode(&archive))
}
