use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::ProductType;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateProductRequest {
    #[validate(length(min = 1))]
    pub brand: String,

    #[validate(length(min = 1))]
    pub model: String,

    pub description: Option<String>,

    pub product_type: ProductType,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1))]
    pub brand: String,

    #[validate(length(min = 1))]
    pub model: String,

    pub description: Option<String>,

    pub product_type: ProductType,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
pub struct ProductListQuery {
    pub brand: Option<String>,
    pub model: Option<String>,
}
