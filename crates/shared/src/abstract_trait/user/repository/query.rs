use crate::{errors::RepositoryError, model::user::UserModel};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<UserModel>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError>;
}
