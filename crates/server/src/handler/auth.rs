use crate::{
    middleware::{client_ip::ClientIp, jwt, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::{auth::DynAuthService, user::service::DynUserService},
    domain::{
        current_user::CurrentUser,
        requests::{LoginRequest, RefreshTokenRequest, RegisterRequest, UpdateProfileRequest},
        responses::{
            ApiResponse, LoginResponse, LogoutResponse, RefreshResponse, RegisterResponse,
            UserResponse,
        },
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/auth/register/",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<RegisterResponse>),
        (status = 400, description = "Validation failed or email already registered", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register_user_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.register_user(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login/",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynAuthService>,
    ClientIp(client_ip): ClientIp,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.login_user(&body, client_ip).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/auth/refresh/",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Token refreshed", body = ApiResponse<RefreshResponse>),
        (status = 401, description = "Invalid, expired or revoked refresh token", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn refresh_token_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RefreshTokenRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.refresh_token(&body.refresh_token).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout/",
    responses(
        (status = 200, description = "All refresh tokens revoked", body = ApiResponse<LogoutResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn logout_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.logout(current_user.id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/auth/me/",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn get_me_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_me(current_user.id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/api/auth/me/",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn update_me_handler(
    Extension(service): Extension<DynUserService>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update_profile(current_user.id, &body).await?;
    Ok(Json(response))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/auth/register/", post(register_user_handler))
        .route("/api/auth/login/", post(login_user_handler))
        .route("/api/auth/refresh/", post(refresh_token_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/auth/logout/", post(logout_handler))
        .route("/api/auth/me/", get(get_me_handler).patch(update_me_handler))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .layer(Extension(app_state.di_container.auth_service.clone()))
        .layer(Extension(app_state.di_container.user_service.clone()));

    public_routes.merge(private_routes)
}
