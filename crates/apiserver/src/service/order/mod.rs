mod command;
mod query;
pub(crate) mod workflow;

pub use self::command::{OrderCommandService, OrderCommandServiceDeps};
pub use self::query::{OrderQueryService, OrderQueryServiceDeps};

use crate::{
    abstract_trait::{DynAddressRepository, DynOrderQueryRepository},
    domain::responses::{OrderItemResponse, OrderResponse},
    errors::ServiceError,
    model::Order,
};

/// Projects an order row into its response shape: latest status, item
/// snapshots with live prices, and the delivery address when one is set.
pub(crate) async fn project_order(
    query: &DynOrderQueryRepository,
    addresses: &DynAddressRepository,
    order: Order,
) -> Result<OrderResponse, ServiceError> {
    let latest = query.latest_status_update(order.id).await?;
    let snapshots = query.item_snapshots(order.id).await?;

    let items: Vec<OrderItemResponse> = snapshots.into_iter().map(Into::into).collect();
    let total_price = items.iter().map(|item| item.price).sum();

    let address = match order.address_id {
        Some(address_id) => Some(addresses.find_by_id(address_id).await?.into()),
        None => None,
    };

    Ok(OrderResponse {
        id: order.id,
        user_id: order.user_id,
        order_type: order.order_type,
        status: latest.status,
        address,
        items,
        total_price,
        created_at: order.created_at,
    })
}
