use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::model::{FootSide, ShoeSizeCode};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductVariant {
    pub id: Uuid,
    pub product_id: Uuid,
    pub color: String,
    pub price: f64,
    pub quantity: i32,
    pub size_code: ShoeSizeCode,
    pub size_value: String,
    pub side: FootSide,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
}
