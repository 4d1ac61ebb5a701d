use serde::Serialize;
use utoipa::ToSchema;

/// Body of every failed response. `status` is `"error"` for mapped service
/// failures and `"fail"` for auth middleware rejections.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}
