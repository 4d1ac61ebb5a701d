use crate::{
    abstract_trait::AuthUser,
    domain::{
        requests::{
            AppendStatusUpdateRecord, CreateOrderRecord, CreateOrderRequest, OrderFilter,
            UpdateOrderStatusRequest,
        },
        responses::{ApiResponse, OrderResponse, OrderStatusUpdateResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderItemSnapshot, OrderStatusUpdate, OrderType},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Persists the order, its items, the initial pending status update and
    /// the stock decrements in a single transaction.
    async fn create_order(&self, record: &CreateOrderRecord) -> Result<Order, RepositoryError>;

    /// Appends a status update only if the latest status still matches
    /// `expected_current`; a miss is a Conflict.
    async fn append_status_update(
        &self,
        record: &AppendStatusUpdateRecord,
    ) -> Result<OrderStatusUpdate, RepositoryError>;
}

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    async fn find_all(
        &self,
        owner: Option<Uuid>,
        types: Option<&[OrderType]>,
    ) -> Result<Vec<Order>, RepositoryError>;
    async fn latest_status_update(
        &self,
        order_id: Uuid,
    ) -> Result<OrderStatusUpdate, RepositoryError>;
    async fn status_history(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<OrderStatusUpdate>, RepositoryError>;
    async fn item_snapshots(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<OrderItemSnapshot>, RepositoryError>;
}

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        auth: &AuthUser,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_order_status(
        &self,
        auth: &AuthUser,
        order_id: Uuid,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderStatusUpdateResponse>, ServiceError>;
}

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn get_order(
        &self,
        auth: &AuthUser,
        order_id: Uuid,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn get_all_orders(
        &self,
        filter: &OrderFilter,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn get_user_orders(
        &self,
        auth: &AuthUser,
        user_id: Uuid,
        filter: &OrderFilter,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn get_status_history(
        &self,
        auth: &AuthUser,
        order_id: Uuid,
    ) -> Result<ApiResponse<Vec<OrderStatusUpdateResponse>>, ServiceError>;
}
