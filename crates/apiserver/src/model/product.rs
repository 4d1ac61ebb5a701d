use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::model::ProductType;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub description: Option<String>,
    pub product_type: ProductType,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
}
