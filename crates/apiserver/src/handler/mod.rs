mod address;
mod auth;
mod order;
mod product;
mod product_variant;
mod user;

use crate::state::AppState;
use crate::utils::shutdown_signal;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::address::address_routes;
pub use self::auth::auth_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;
pub use self::product_variant::product_variant_routes;
pub use self::user::user_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::create_token,

        user::create_user,
        user::get_users,
        user::get_user,
        user::update_user,
        user::get_user_orders,

        address::get_addresses,
        address::create_address,
        address::get_address,
        address::update_address,
        address::delete_address,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        product_variant::get_variants,
        product_variant::get_variant,
        product_variant::create_variant,
        product_variant::update_variant,
        product_variant::delete_variant,

        order::create_order,
        order::get_orders,
        order::get_order,
        order::update_order_status,
        order::get_order_status_history,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Development token endpoints"),
        (name = "User", description = "User profile endpoints"),
        (name = "Address", description = "User address endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Product-variant", description = "Product variant endpoints"),
        (name = "Order", description = "Order lifecycle endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                )),
            );
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()))
            .merge(address_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(product_variant_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_covers_every_route_and_serializes() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/v1/auth/token",
            "/api/v1/users",
            "/api/v1/users/{id}",
            "/api/v1/users/{id}/orders",
            "/api/v1/users/{id}/addresses",
            "/api/v1/users/{id}/addresses/{address_id}",
            "/api/v1/products",
            "/api/v1/products/{id}",
            "/api/v1/product-variants",
            "/api/v1/product-variants/{id}",
            "/api/v1/orders",
            "/api/v1/orders/{id}",
            "/api/v1/orders/{id}/statuses",
            "/api/v1/orders/{id}/statuses/current",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }

        serde_json::to_string(&doc).expect("document should serialize");
    }
}
