use crate::{
    domain::{
        current_user::CurrentUser,
        requests::{UpdateProfileRequest, UpdateRoleRequest},
        responses::{ApiResponse, UserResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    async fn update_profile(
        &self,
        user_id: i32,
        req: &UpdateProfileRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;

    async fn update_role(
        &self,
        actor: &CurrentUser,
        user_id: i32,
        req: &UpdateRoleRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
}
