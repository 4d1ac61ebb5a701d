use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateAddressRequest {
    #[validate(length(min = 1))]
    pub country: String,

    pub province: Option<String>,

    #[validate(length(min = 1))]
    pub city: String,

    pub suburb: Option<String>,

    #[validate(range(min = 1))]
    pub postal_code: i32,

    #[validate(length(min = 1))]
    pub street_number: String,

    #[validate(length(min = 1))]
    pub street_name: String,

    pub unit_number: Option<String>,

    pub complex_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateAddressRequest {
    #[validate(length(min = 1))]
    pub country: String,

    pub province: Option<String>,

    #[validate(length(min = 1))]
    pub city: String,

    pub suburb: Option<String>,

    #[validate(range(min = 1))]
    pub postal_code: i32,

    #[validate(length(min = 1))]
    pub street_number: String,

    #[validate(length(min = 1))]
    pub street_name: String,

    pub unit_number: Option<String>,

    pub complex_name: Option<String>,
}
