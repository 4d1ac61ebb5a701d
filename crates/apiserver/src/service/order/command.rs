use crate::{
    abstract_trait::{
        AuthUser, DynAddressRepository, DynOrderCommandRepository, DynOrderQueryRepository,
        DynUserProfileRepository, OrderCommandServiceTrait,
    },
    domain::{
        requests::{
            AppendStatusUpdateRecord, CreateOrderRecord, CreateOrderRequest,
            UpdateOrderStatusRequest,
        },
        responses::{ApiResponse, OrderResponse, OrderStatusUpdateResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::OrderType,
    service::order::{project_order, workflow},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
    users: DynUserProfileRepository,
    addresses: DynAddressRepository,
}

pub struct OrderCommandServiceDeps {
    pub command: DynOrderCommandRepository,
    pub query: DynOrderQueryRepository,
    pub users: DynUserProfileRepository,
    pub addresses: DynAddressRepository,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            command,
            query,
            users,
            addresses,
        } = deps;

        Self {
            command,
            query,
            users,
            addresses,
        }
    }

    async fn resolve_address(
        &self,
        auth: &AuthUser,
        req: &CreateOrderRequest,
    ) -> Result<Option<Uuid>, ServiceError> {
        match req.order_type {
            // collection orders never carry an address, even if one was sent
            OrderType::Collection => Ok(None),
            OrderType::Delivery => {
                let address_id = req.address_id.ok_or_else(|| {
                    ServiceError::NotFound("Delivery orders require an address".to_string())
                })?;

                let address = self.addresses.find_by_id(address_id).await.map_err(|err| {
                    match err {
                        RepositoryError::NotFound => {
                            ServiceError::NotFound(format!("Address {address_id} not found"))
                        }
                        other => ServiceError::from(other),
                    }
                })?;

                if address.user_id != auth.id {
                    return Err(ServiceError::NotFound(format!(
                        "Address {address_id} not found"
                    )));
                }

                Ok(Some(address.id))
            }
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        auth: &AuthUser,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        self.users.find_by_id(auth.id).await.map_err(|err| match err {
            RepositoryError::NotFound => {
                ServiceError::NotFound(format!("User {} not found", auth.id))
            }
            other => ServiceError::from(other),
        })?;

        let address_id = self.resolve_address(auth, req).await?;

        let record = CreateOrderRecord {
            user_id: auth.id,
            order_type: req.order_type,
            address_id,
            product_variant_ids: req.product_variant_ids.clone(),
        };

        let order = self.command.create_order(&record).await.map_err(|err| {
            error!("❌ Failed to create order for user {}: {err}", auth.id);
            match err {
                RepositoryError::NotFound => {
                    ServiceError::NotFound("One or more product variants were not found".to_string())
                }
                other => ServiceError::from(other),
            }
        })?;

        let response = project_order(&self.query, &self.addresses, order).await?;

        info!(
            "✅ Order {} created for user {} ({} item(s))",
            response.id,
            auth.id,
            response.items.len()
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order created successfully".to_string(),
            data: response,
        })
    }

    async fn update_order_status(
        &self,
        auth: &AuthUser,
        order_id: Uuid,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderStatusUpdateResponse>, ServiceError> {
        let order = self.query.find_by_id(order_id).await.map_err(|err| match err {
            RepositoryError::NotFound => {
                ServiceError::NotFound(format!("Order {order_id} not found"))
            }
            other => ServiceError::from(other),
        })?;

        let latest = self.query.latest_status_update(order_id).await?;

        if !workflow::is_transition_allowed(latest.status, req.status, order.order_type) {
            info!(
                "🚫 Rejected transition {:?} -> {:?} for {:?} order {order_id}",
                latest.status, req.status, order.order_type
            );
            return Err(ServiceError::InvalidTransition {
                current: latest.status,
                requested: req.status,
                order_type: order.order_type,
            });
        }

        let record = AppendStatusUpdateRecord {
            order_id,
            status: req.status,
            expected_current: latest.status,
            created_by: auth.id,
        };

        let update = self.command.append_status_update(&record).await?;

        info!(
            "✅ Order {order_id} moved from {:?} to {:?}",
            latest.status, update.status
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order status updated successfully".to_string(),
            data: update.into(),
        })
    }
}
