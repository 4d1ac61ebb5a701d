use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::model::{OrderStatus, OrderType};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateOrderRequest {
    pub order_type: OrderType,

    /// Required for delivery orders, ignored for collection.
    pub address_id: Option<Uuid>,

    /// One entry per unit; the same variant may appear more than once.
    /// Capped so the per-order item counter always fits its column.
    #[validate(length(min = 1, max = 100))]
    pub product_variant_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// Repeated `status` / `order_type` params; an empty set matches everything.
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
pub struct OrderListQuery {
    #[serde(default)]
    pub status: Vec<OrderStatus>,

    #[serde(default)]
    pub order_type: Vec<OrderType>,
}

/// Normalized filter handed to the order query service. `None` matches all.
#[derive(Debug, Default, Clone)]
pub struct OrderFilter {
    pub owner: Option<Uuid>,
    pub statuses: Option<Vec<OrderStatus>>,
    pub types: Option<Vec<OrderType>>,
}

impl OrderFilter {
    /// Empty lists from the wire mean "no restriction".
    pub fn from_query(owner: Option<Uuid>, query: OrderListQuery) -> Self {
        OrderFilter {
            owner,
            statuses: (!query.status.is_empty()).then_some(query.status),
            types: (!query.order_type.is_empty()).then_some(query.order_type),
        }
    }
}

/// Everything the repository needs to persist a new order in one transaction.
#[derive(Debug, Clone)]
pub struct CreateOrderRecord {
    pub user_id: Uuid,
    pub order_type: OrderType,
    pub address_id: Option<Uuid>,
    pub product_variant_ids: Vec<Uuid>,
}

/// Compare-and-append payload for the status history.
#[derive(Debug, Clone)]
pub struct AppendStatusUpdateRecord {
    pub order_id: Uuid,
    pub status: OrderStatus,
    pub expected_current: OrderStatus,
    pub created_by: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wire_lists_normalize_to_match_all() {
        let filter = OrderFilter::from_query(None, OrderListQuery::default());

        assert!(filter.owner.is_none());
        assert!(filter.statuses.is_none());
        assert!(filter.types.is_none());
    }

    #[test]
    fn populated_wire_lists_are_kept() {
        let owner = Uuid::new_v4();
        let query = OrderListQuery {
            status: vec![OrderStatus::Pending, OrderStatus::Confirmed],
            order_type: vec![OrderType::Delivery],
        };

        let filter = OrderFilter::from_query(Some(owner), query);

        assert_eq!(filter.owner, Some(owner));
        assert_eq!(
            filter.statuses,
            Some(vec![OrderStatus::Pending, OrderStatus::Confirmed])
        );
        assert_eq!(filter.types, Some(vec![OrderType::Delivery]));
    }

    #[test]
    fn order_body_is_capped_at_one_hundred_items() {
        let request = |count: usize| CreateOrderRequest {
            order_type: OrderType::Collection,
            address_id: None,
            product_variant_ids: vec![Uuid::new_v4(); count],
        };

        assert!(request(0).validate().is_err());
        assert!(request(1).validate().is_ok());
        assert!(request(100).validate().is_ok());
        assert!(request(101).validate().is_err());
    }
}
