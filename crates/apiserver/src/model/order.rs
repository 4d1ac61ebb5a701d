use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::model::{FootSide, OrderStatus, OrderType, ShoeSizeCode};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub order_type: OrderType,
    pub address_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_id: Uuid,
    pub product_variant_id: Uuid,
    pub seq: i16,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderStatusUpdate {
    pub id: Uuid,
    pub seq: i64,
    pub order_id: Uuid,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
}

/// One order item joined with its variant and product at read time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItemSnapshot {
    pub product_variant_id: Uuid,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub size_code: ShoeSizeCode,
    pub size_value: String,
    pub side: FootSide,
    pub price: f64,
}
