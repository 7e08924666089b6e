use serde::{Deserialize, Serialize};

/// A purchased RC document, returned by the single-lookup server function.
///
/// The upstream responds with raw PDF bytes; the server boundary re-encodes
/// them as base64 so the payload survives the server-function wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcDocument {
    pub vehicle_number: String,
    pub document_base64: String,
}
