use crate::{
    domain::requests::{CreateUserRequest, RecordLoginRequest},
    errors::RepositoryError,
    model::{role::Role, user::UserModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError>;

    async fn update_profile(
        &self,
        user_id: i32,
        display_name: &str,
    ) -> Result<UserModel, RepositoryError>;

    async fn update_role(&self, user_id: i32, role: Role) -> Result<UserModel, RepositoryError>;

    async fn record_login(&self, req: &RecordLoginRequest) -> Result<(), RepositoryError>;
}
