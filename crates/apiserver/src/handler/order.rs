use crate::{
    abstract_trait::{AuthUser, DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::{CreateOrderRequest, OrderFilter, OrderListQuery, UpdateOrderStatusRequest},
        responses::{ApiResponse, OrderResponse, OrderStatusUpdateResponse},
    },
    errors::HttpError,
    middleware::{SimpleValidatedJson, admin_middleware, auth_middleware},
    model::UserRole,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::Query;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Buyer role required"),
        (status = 404, description = "User, address or product variant not found"),
        (status = 409, description = "A product variant is out of stock")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    if auth.role != UserRole::Buyer {
        return Err(HttpError::Forbidden("Buyer role required".to_string()));
    }

    let response = service.create_order(&auth, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(OrderListQuery),
    responses(
        (status = 200, description = "List of orders", body = ApiResponse<Vec<OrderResponse>>),
        (status = 403, description = "Administrator role required")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Query(params): Query<OrderListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let filter = OrderFilter::from_query(None, params);
    let response = service.get_all_orders(&filter).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Not the owner or an administrator")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_order(&auth, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/v1/orders/{id}/statuses/current",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status transition applied", body = ApiResponse<OrderStatusUpdateResponse>),
        (status = 400, description = "Transition not allowed for this order"),
        (status = 404, description = "Order not found"),
        (status = 403, description = "Administrator role required"),
        (status = 409, description = "Order status changed concurrently")
    )
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_order_status(&auth, id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}/statuses",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Status history, newest first", body = ApiResponse<Vec<OrderStatusUpdateResponse>>),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Not the owner or an administrator")
    )
)]
pub async fn get_order_status_history(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_status_history(&auth, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let admin_routes = OpenApiRouter::new()
        .route("/api/v1/orders", get(get_orders))
        .route("/api/v1/orders/{id}/statuses/current", post(update_order_status))
        .route_layer(middleware::from_fn(admin_middleware));

    OpenApiRouter::new()
        .route("/api/v1/orders", post(create_order))
        .route("/api/v1/orders/{id}", get(get_order))
        .route("/api/v1/orders/{id}/statuses", get(get_order_status_history))
        .merge(admin_routes)
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_command.clone()))
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(app_state.jwt.clone()))
}
