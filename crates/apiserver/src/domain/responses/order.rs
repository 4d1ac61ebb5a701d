use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::responses::AddressResponse;
use crate::model::{FootSide, OrderItemSnapshot, OrderStatus, OrderStatusUpdate, OrderType, ShoeSizeCode};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub address: Option<AddressResponse>,
    pub items: Vec<OrderItemResponse>,
    /// Sum of current unit prices; never frozen at creation time.
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub product_variant_id: Uuid,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub size_code: ShoeSizeCode,
    pub size_value: String,
    pub side: FootSide,
    pub price: f64,
}

impl From<OrderItemSnapshot> for OrderItemResponse {
    fn from(value: OrderItemSnapshot) -> Self {
        OrderItemResponse {
            product_variant_id: value.product_variant_id,
            brand: value.brand,
            model: value.model,
            color: value.color,
            size_code: value.size_code,
            size_value: value.size_value,
            side: value.side,
            price: value.price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderStatusUpdateResponse {
    pub id: Uuid,
    pub order_id: Uuid,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
}

impl From<OrderStatusUpdate> for OrderStatusUpdateResponse {
    fn from(value: OrderStatusUpdate) -> Self {
        OrderStatusUpdateResponse {
            id: value.id,
            order_id: value.order_id,
            status: value.status,
            created_at: value.created_at,
            created_by: value.created_by,
        }
    }
}
