use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use serde_json::json;
use shared::errors::{AppErrorHttp, ServiceError};
use std::sync::Arc;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

const OPENMETRICS_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

#[utoipa::path(
    get,
    path = "/api/health/",
    responses((status = 200, description = "Service is up")),
    tag = "Health"
)]
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "success",
        "message": "Service is healthy",
    }))
}

pub async fn metrics_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let mut buffer = String::new();

    encode(&mut buffer, &state.registry).map_err(|e| {
        error!("❌ Failed to encode metrics: {e}");
        ServiceError::InternalServerError(e.to_string())
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, OPENMETRICS_CONTENT_TYPE)],
        buffer,
    ))
}

pub fn health_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/health/", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(app_state)
}
