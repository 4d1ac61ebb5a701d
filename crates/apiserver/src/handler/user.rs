use crate::{
    abstract_trait::{AuthUser, DynOrderQueryService, DynUserProfileService},
    domain::{
        requests::{
            CreateUserProfileRequest, OrderFilter, OrderListQuery, UpdateUserProfileRequest,
            UserListQuery,
        },
        responses::{ApiResponse, OrderResponse, UserProfileResponse},
    },
    errors::HttpError,
    middleware::{SimpleValidatedJson, admin_middleware, auth_middleware},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_extra::extract::Query;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "User",
    security(("bearer_auth" = [])),
    request_body = CreateUserProfileRequest,
    responses(
        (status = 201, description = "Profile created for the authenticated user", body = ApiResponse<UserProfileResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_user(
    Extension(service): Extension<DynUserProfileService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateUserProfileRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_profile(&auth, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "User",
    security(("bearer_auth" = [])),
    params(UserListQuery),
    responses(
        (status = 200, description = "List of user profiles", body = ApiResponse<Vec<UserProfileResponse>>),
        (status = 403, description = "Administrator role required")
    )
)]
pub async fn get_users(
    Extension(service): Extension<DynUserProfileService>,
    Query(params): Query<UserListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_profiles(params.role).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile", body = ApiResponse<UserProfileResponse>),
        (status = 404, description = "User not found"),
        (status = 401, description = "Not the owner or an administrator")
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserProfileService>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_profile(&auth, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserProfileRequest,
    responses(
        (status = 200, description = "User profile updated", body = ApiResponse<UserProfileResponse>),
        (status = 404, description = "User not found"),
        (status = 401, description = "Not the owner or an administrator")
    )
)]
pub async fn update_user(
    Extension(service): Extension<DynUserProfileService>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateUserProfileRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_profile(&auth, id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/orders",
    tag = "User",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID"),
        OrderListQuery
    ),
    responses(
        (status = 200, description = "Orders placed by the user", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Not the owner or an administrator")
    )
)]
pub async fn get_user_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Query(params): Query<OrderListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let filter = OrderFilter::from_query(None, params);
    let response = service.get_user_orders(&auth, id, &filter).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let admin_routes = OpenApiRouter::new()
        .route("/api/v1/users", get(get_users))
        .route_layer(middleware::from_fn(admin_middleware));

    OpenApiRouter::new()
        .route("/api/v1/users", post(create_user))
        .route("/api/v1/users/{id}", get(get_user))
        .route("/api/v1/users/{id}", put(update_user))
        .route("/api/v1/users/{id}/orders", get(get_user_orders))
        .merge(admin_routes)
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.user_profile.clone()))
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(app_state.jwt.clone()))
}
