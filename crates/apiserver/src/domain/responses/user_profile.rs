use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{Gender, UserProfile, UserRole};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub role: UserRole,
    pub first_name: String,
    pub surname: Option<String>,
    pub email: String,
    pub gender: Gender,
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(value: UserProfile) -> Self {
        UserProfileResponse {
            id: value.id,
            role: value.role,
            first_name: value.first_name,
            surname: value.surname,
            email: value.email,
            gender: value.gender,
            created_at: value.created_at,
        }
    }
}
