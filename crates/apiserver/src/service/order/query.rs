use crate::{
    abstract_trait::{
        AuthUser, DynAddressRepository, DynOrderQueryRepository, OrderQueryServiceTrait,
    },
    domain::{
        requests::OrderFilter,
        responses::{ApiResponse, OrderResponse, OrderStatusUpdateResponse},
    },
    errors::{RepositoryError, ServiceError},
    service::order::project_order,
};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    addresses: DynAddressRepository,
}

pub struct OrderQueryServiceDeps {
    pub query: DynOrderQueryRepository,
    pub addresses: DynAddressRepository,
}

impl OrderQueryService {
    pub fn new(deps: OrderQueryServiceDeps) -> Self {
        let OrderQueryServiceDeps { query, addresses } = deps;

        Self { query, addresses }
    }

    async fn project_filtered(
        &self,
        filter: &OrderFilter,
    ) -> Result<Vec<OrderResponse>, ServiceError> {
        let orders = self
            .query
            .find_all(filter.owner, filter.types.as_deref())
            .await?;

        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            responses.push(project_order(&self.query, &self.addresses, order).await?);
        }

        // the status filter applies to each order's latest status, which only
        // exists after projection
        if let Some(statuses) = &filter.statuses {
            responses.retain(|order| statuses.contains(&order.status));
        }

        Ok(responses)
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn get_order(
        &self,
        auth: &AuthUser,
        order_id: Uuid,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self.query.find_by_id(order_id).await.map_err(|err| match err {
            RepositoryError::NotFound => {
                ServiceError::NotFound(format!("Order {order_id} not found"))
            }
            other => ServiceError::from(other),
        })?;

        if order.user_id != auth.id && !auth.is_admin() {
            return Err(ServiceError::Unauthorized(
                "You do not have access to this order".to_string(),
            ));
        }

        let response = project_order(&self.query, &self.addresses, order).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order retrieved successfully".to_string(),
            data: response,
        })
    }

    async fn get_all_orders(
        &self,
        filter: &OrderFilter,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let responses = self.project_filtered(filter).await?;

        info!("📦 Listed {} order(s)", responses.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Orders retrieved successfully".to_string(),
            data: responses,
        })
    }

    async fn get_user_orders(
        &self,
        auth: &AuthUser,
        user_id: Uuid,
        filter: &OrderFilter,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        if user_id != auth.id && !auth.is_admin() {
            return Err(ServiceError::Unauthorized(
                "You do not have access to these orders".to_string(),
            ));
        }

        let scoped = OrderFilter {
            owner: Some(user_id),
            statuses: filter.statuses.clone(),
            types: filter.types.clone(),
        };

        let responses = self.project_filtered(&scoped).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Orders retrieved successfully".to_string(),
            data: responses,
        })
    }

    async fn get_status_history(
        &self,
        auth: &AuthUser,
        order_id: Uuid,
    ) -> Result<ApiResponse<Vec<OrderStatusUpdateResponse>>, ServiceError> {
        let order = self.query.find_by_id(order_id).await.map_err(|err| match err {
            RepositoryError::NotFound => {
                ServiceError::NotFound(format!("Order {order_id} not found"))
            }
            other => ServiceError::from(other),
        })?;

        if order.user_id != auth.id && !auth.is_admin() {
            return Err(ServiceError::Unauthorized(
                "You do not have access to this order".to_string(),
            ));
        }

        let history = self.query.status_history(order_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order status history retrieved successfully".to_string(),
            data: history.into_iter().map(Into::into).collect(),
        })
    }
}
