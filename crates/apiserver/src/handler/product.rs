use crate::{
    abstract_trait::{AuthUser, DynProductService},
    domain::{
        requests::{CreateProductRequest, ProductListQuery, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::HttpError,
    middleware::{SimpleValidatedJson, admin_middleware, auth_middleware},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(ProductListQuery),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductService>,
    Query(params): Query<ProductListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_products(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Administrator role required")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&auth, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found"),
        (status = 403, description = "Administrator role required")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_product(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found"),
        (status = 403, description = "Administrator role required")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let admin_routes = OpenApiRouter::new()
        .route("/api/v1/products", post(create_product))
        .route("/api/v1/products/{id}", put(update_product))
        .route("/api/v1/products/{id}", delete(delete_product))
        .route_layer(middleware::from_fn(admin_middleware));

    OpenApiRouter::new()
        .route("/api/v1/products", get(get_products))
        .route("/api/v1/products/{id}", get(get_product))
        .merge(admin_routes)
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product.clone()))
        .layer(Extension(app_state.jwt.clone()))
}
