use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::model::UserRole;

/// Development token issuance. A fresh user id is generated when none is given.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTokenRequest {
    pub user_id: Option<Uuid>,
    pub role: UserRole,
}
