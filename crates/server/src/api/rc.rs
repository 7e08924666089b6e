use dioxus::prelude::*;
use shared_types::RcDocument;

/// Purchase a single RC, debiting the agent's wallet.
///
/// Proxies `POST /api/dashboard/get-rc`; the upstream responds with the RC
/// document as raw PDF bytes, returned here base64-encoded.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_rc(vehicle_number: String) -> Result<RcDocument, ServerFnError> {
    use crate::error_convert::{AppErrorExt, ReqwestErrorExt};
    use crate::upstream;
    use base64::Engine as _;
    use shared_types::AppError;

    let vehicle_number = vehicle_number.trim().to_uppercase();
    if vehicle_number.len() < 4 {
        return Err(
            AppError::bad_request("Vehicle number must be at least 4 characters")
                .into_server_fn_error(),
        );
    }

    let req = upstream::client()
        .post(upstream::url("/api/dashboard/get-rc"))
        .json(&serde_json::json!({ "vehicleNumber": vehicle_number }));
    let resp = upstream::with_session(req)
        .send()
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if !resp.status().is_success() {
        return Err(upstream::error_from_response(resp)
            .await
            .into_server_fn_error());
    }

    let document = resp
        .bytes()
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    Ok(RcDocument {
        vehicle_number,
        document_base64: base64::engine::general_purpose::STANDARD.encode(&document),
    })
}
