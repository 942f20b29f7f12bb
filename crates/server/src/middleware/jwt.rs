use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
    typed_header::TypedHeaderRejection,
};
use shared::errors::{AppErrorHttp, ServiceError};
use std::sync::Arc;
use tracing::debug;

/// Resolves the bearer token to a `CurrentUser` extension, or rejects with 401.
pub async fn auth(
    State(state): State<Arc<AppState>>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppErrorHttp> {
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|e| {
        debug!("Missing or malformed Authorization header: {e}");
        ServiceError::Unauthenticated("Access token required".to_string())
    })?;

    let current_user = state
        .di_container
        .auth_service
        .authenticate(bearer.token())
        .await?;

    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}
