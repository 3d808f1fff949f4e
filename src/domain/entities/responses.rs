use serde::{Deserialize, Serialize};

/// Envelope returned by a successful upsert: the stored row echoed back so
/// the caller sees server-side normalization such as a generated id.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpsertResponse<E> {
    pub success: bool,
    pub data: E,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}
