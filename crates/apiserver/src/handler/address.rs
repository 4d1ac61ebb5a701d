use crate::{
    abstract_trait::{AuthUser, DynAddressService},
    domain::{
        requests::{CreateAddressRequest, UpdateAddressRequest},
        responses::{AddressResponse, ApiResponse},
    },
    errors::HttpError,
    middleware::{SimpleValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
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
    path = "/api/v1/users/{id}/addresses",
    tag = "Address",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Addresses of the user", body = ApiResponse<Vec<AddressResponse>>),
        (status = 401, description = "Not the owner or an administrator")
    )
)]
pub async fn get_addresses(
    Extension(service): Extension<DynAddressService>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.list_addresses(&auth, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/addresses",
    tag = "Address",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = CreateAddressRequest,
    responses(
        (status = 201, description = "Address created", body = ApiResponse<AddressResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not the owner or an administrator")
    )
)]
pub async fn create_address(
    Extension(service): Extension<DynAddressService>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateAddressRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_address(&auth, id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/addresses/{address_id}",
    tag = "Address",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID"),
        ("address_id" = Uuid, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address details", body = ApiResponse<AddressResponse>),
        (status = 404, description = "Address not found"),
        (status = 401, description = "Not the owner or an administrator")
    )
)]
pub async fn get_address(
    Extension(service): Extension<DynAddressService>,
    Extension(auth): Extension<AuthUser>,
    Path((id, address_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_address(&auth, id, address_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/addresses/{address_id}",
    tag = "Address",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID"),
        ("address_id" = Uuid, Path, description = "Address ID")
    ),
    request_body = UpdateAddressRequest,
    responses(
        (status = 200, description = "Address updated", body = ApiResponse<AddressResponse>),
        (status = 404, description = "Address not found"),
        (status = 401, description = "Not the owner or an administrator")
    )
)]
pub async fn update_address(
    Extension(service): Extension<DynAddressService>,
    Extension(auth): Extension<AuthUser>,
    Path((id, address_id)): Path<(Uuid, Uuid)>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateAddressRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_address(&auth, id, address_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}/addresses/{address_id}",
    tag = "Address",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID"),
        ("address_id" = Uuid, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address deleted"),
        (status = 404, description = "Address not found"),
        (status = 401, description = "Not the owner or an administrator")
    )
)]
pub async fn delete_address(
    Extension(service): Extension<DynAddressService>,
    Extension(auth): Extension<AuthUser>,
    Path((id, address_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_address(&auth, id, address_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn address_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/users/{id}/addresses", get(get_addresses))
        .route("/api/v1/users/{id}/addresses", post(create_address))
        .route("/api/v1/users/{id}/addresses/{address_id}", get(get_address))
        .route("/api/v1/users/{id}/addresses/{address_id}", put(update_address))
        .route("/api/v1/users/{id}/addresses/{address_id}", delete(delete_address))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.address.clone()))
        .layer(Extension(app_state.jwt.clone()))
}
