use crate::{
    domain::requests::CreateRefreshToken, errors::RepositoryError,
    model::refresh_token::RefreshTokenModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRefreshTokenCommandRepository =
    Arc<dyn RefreshTokenCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RefreshTokenCommandRepositoryTrait {
    async fn create(&self, req: &CreateRefreshToken)
    -> Result<RefreshTokenModel, RepositoryError>;

    /// Marks every live token of the user revoked; returns how many changed.
    async fn revoke_all_for_user(&self, user_id: i32) -> Result<u64, RepositoryError>;
}
