mod auth;
mod health;
mod learn;
mod shop;
mod user;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{Router, extract::DefaultBodyLimit};
use shared::utils::shutdown_signal;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::health::health_routes;
pub use self::learn::learn_routes;
pub use self::shop::shop_routes;
pub use self::user::user_routes;

const MAX_BODY_SIZE: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_user_handler,
        auth::login_user_handler,
        auth::refresh_token_handler,
        auth::logout_handler,
        auth::get_me_handler,
        auth::update_me_handler,

        user::update_role_handler,

        learn::get_courses,
        learn::create_course,
        learn::get_course,
        learn::update_course,
        learn::delete_course,
        learn::create_lesson,
        learn::get_lessons,
        learn::enroll,
        learn::get_progress,
        learn::complete_lesson,
        learn::get_enrollments,

        shop::get_products,
        shop::get_product,
        shop::create_product,
        shop::get_cart,
        shop::add_cart_item,
        shop::update_cart_item,
        shop::remove_cart_item,

        health::health_handler,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration, login and token lifecycle endpoints"),
        (name = "User", description = "User administration endpoints"),
        (name = "Learn", description = "Courses, lessons and enrollment progress"),
        (name = "Shop", description = "Product catalogue and the caller's cart"),
        (name = "Health", description = "Liveness check"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()))
            .merge(learn_routes(shared_state.clone()))
            .merge(shop_routes(shared_state.clone()))
            .merge(health_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server exited with an error")?;

        Ok(())
    }
}
