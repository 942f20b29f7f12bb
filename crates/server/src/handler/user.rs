use crate::{
    middleware::{jwt, path::SimplePath, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json, middleware, response::IntoResponse, routing::put,
};
use shared::{
    abstract_trait::user::service::DynUserService,
    domain::{
        current_user::CurrentUser,
        requests::UpdateRoleRequest,
        responses::{ApiResponse, UserResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    put,
    path = "/api/users/{id}/role/",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = ApiResponse<UserResponse>),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "User"
)]
pub async fn update_role_handler(
    Extension(service): Extension<DynUserService>,
    Extension(current_user): Extension<CurrentUser>,
    SimplePath(id): SimplePath<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateRoleRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update_role(&current_user, id, &body).await?;
    Ok(Json(response))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/users/{id}/role/", put(update_role_handler))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .layer(Extension(app_state.di_container.user_service.clone()))
}
