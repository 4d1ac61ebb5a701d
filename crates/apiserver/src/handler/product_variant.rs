use crate::{
    abstract_trait::{AuthUser, DynProductVariantService},
    domain::{
        requests::{
            CreateProductVariantRequest, ProductVariantListQuery, UpdateProductVariantRequest,
        },
        responses::{ApiResponse, ProductVariantResponse},
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
    path = "/api/v1/product-variants",
    tag = "Product-variant",
    security(("bearer_auth" = [])),
    params(ProductVariantListQuery),
    responses(
        (status = 200, description = "List of product variants", body = ApiResponse<Vec<ProductVariantResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_variants(
    Extension(service): Extension<DynProductVariantService>,
    Query(params): Query<ProductVariantListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_variants(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/product-variants/{id}",
    tag = "Product-variant",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product variant ID")),
    responses(
        (status = 200, description = "Product variant details", body = ApiResponse<ProductVariantResponse>),
        (status = 404, description = "Product variant not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_variant(
    Extension(service): Extension<DynProductVariantService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_variant(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/v1/product-variants",
    tag = "Product-variant",
    security(("bearer_auth" = [])),
    request_body = CreateProductVariantRequest,
    responses(
        (status = 201, description = "Product variant created", body = ApiResponse<ProductVariantResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found"),
        (status = 403, description = "Administrator role required")
    )
)]
pub async fn create_variant(
    Extension(service): Extension<DynProductVariantService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductVariantRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_variant(&auth, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/v1/product-variants/{id}",
    tag = "Product-variant",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product variant ID")),
    request_body = UpdateProductVariantRequest,
    responses(
        (status = 200, description = "Product variant updated", body = ApiResponse<ProductVariantResponse>),
        (status = 404, description = "Product variant not found"),
        (status = 403, description = "Administrator role required")
    )
)]
pub async fn update_variant(
    Extension(service): Extension<DynProductVariantService>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductVariantRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_variant(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/product-variants/{id}",
    tag = "Product-variant",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product variant ID")),
    responses(
        (status = 200, description = "Product variant deleted"),
        (status = 404, description = "Product variant not found"),
        (status = 403, description = "Administrator role required")
    )
)]
pub async fn delete_variant(
    Extension(service): Extension<DynProductVariantService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_variant(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_variant_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let admin_routes = OpenApiRouter::new()
        .route("/api/v1/product-variants", post(create_variant))
        .route("/api/v1/product-variants/{id}", put(update_variant))
        .route("/api/v1/product-variants/{id}", delete(delete_variant))
        .route_layer(middleware::from_fn(admin_middleware));

    OpenApiRouter::new()
        .route("/api/v1/product-variants", get(get_variants))
        .route("/api/v1/product-variants/{id}", get(get_variant))
        .merge(admin_routes)
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_variant.clone()))
        .layer(Extension(app_state.jwt.clone()))
}
