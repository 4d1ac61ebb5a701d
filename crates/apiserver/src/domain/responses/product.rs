use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{Product, ProductType};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub description: Option<String>,
    pub product_type: ProductType,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.id,
            brand: value.brand,
            model: value.model,
            description: value.description,
            product_type: value.product_type,
            created_at: value.created_at,
        }
    }
}
