use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::model::{FootSide, ShoeSizeCode};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateProductVariantRequest {
    pub product_id: Uuid,

    #[validate(length(min = 1))]
    pub color: String,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate(range(min = 0))]
    pub quantity: i32,

    pub size_code: ShoeSizeCode,

    #[validate(length(min = 1))]
    pub size_value: String,

    pub side: FootSide,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateProductVariantRequest {
    pub color: Option<String>,

    #[validate(range(min = 0.0))]
    pub price: Option<f64>,

    #[validate(range(min = 0))]
    pub quantity: Option<i32>,

    pub size_code: Option<ShoeSizeCode>,

    pub size_value: Option<String>,

    pub side: Option<FootSide>,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
pub struct ProductVariantListQuery {
    pub color: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}
