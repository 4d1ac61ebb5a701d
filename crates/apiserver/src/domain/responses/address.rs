use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::Address;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct AddressResponse {
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

impl From<Address> for AddressResponse {
    fn from(value: Address) -> Self {
        AddressResponse {
            id: value.id,
            user_id: value.user_id,
            country: value.country,
            province: value.province,
            city: value.city,
            suburb: value.suburb,
            postal_code: value.postal_code,
            street_number: value.street_number,
            street_name: value.street_name,
            unit_number: value.unit_number,
            complex_name: value.complex_name,
            created_at: value.created_at,
        }
    }
}
