use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub id: Uuid,
    pub user_id: Uuid,
    pub country: String,
    pub province: Option<String>,
    pub city: String,
    pub suburb: Option<String>,
    pub postal_code: i32,
    pub street_number: String,
    pub street_name: String,
    pub unit_number: Option<String>,
    pub complex_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
