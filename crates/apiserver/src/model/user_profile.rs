use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::model::{Gender, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub role: UserRole,
    pub first_name: String,
    pub surname: Option<String>,
    pub email: String,
    pub gender: Gender,
    pub created_at: DateTime<Utc>,
}
