use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{FootSide, ProductVariant, ShoeSizeCode};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductVariantResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub color: String,
    pub price: f64,
    pub quantity: i32,
    pub size_code: ShoeSizeCode,
    pub size_value: String,
    pub side: FootSide,
    pub created_at: DateTime<Utc>,
}

impl From<ProductVariant> for ProductVariantResponse {
    fn from(value: ProductVariant) -> Self {
        ProductVariantResponse {
            id: value.id,
            product_id: value.product_id,
            color: value.color,
            price: value.price,
            quantity: value.quantity,
            size_code: value.size_code,
            size_value: value.size_value,
            side: value.side,
            created_at: value.created_at,
        }
    }
}
