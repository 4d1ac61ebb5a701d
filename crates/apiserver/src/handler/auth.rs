use crate::{
    abstract_trait::DynAuthService,
    domain::{requests::CreateTokenRequest, responses::{ApiResponse, TokenResponse}},
    errors::HttpError,
    middleware::SimpleValidatedJson,
    state::AppState,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/v1/auth/token",
    tag = "Auth",
    request_body = CreateTokenRequest,
    responses(
        (status = 201, description = "Token issued", body = ApiResponse<TokenResponse>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_token(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateTokenRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_token(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/auth/token", post(create_token))
        .layer(Extension(app_state.di_container.auth.clone()))
}
