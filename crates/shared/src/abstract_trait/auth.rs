use crate::{
    domain::{
        current_user::CurrentUser,
        requests::{LoginRequest, RegisterRequest},
        responses::{
            ApiResponse, LoginResponse, LogoutResponse, RefreshResponse, RegisterResponse,
            UserResponse,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register_user(
        &self,
        input: &RegisterRequest,
    ) -> Result<ApiResponse<RegisterResponse>, ServiceError>;

    async fn login_user(
        &self,
        input: &LoginRequest,
        client_ip: Option<String>,
    ) -> Result<ApiResponse<LoginResponse>, ServiceError>;

    async fn refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<ApiResponse<RefreshResponse>, ServiceError>;

    async fn logout(&self, user_id: i32) -> Result<ApiResponse<LogoutResponse>, ServiceError>;

    async fn get_me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError>;

    /// Resolves a bearer access token to an active user.
    async fn authenticate(&self, token: &str) -> Result<CurrentUser, ServiceError>;
}
