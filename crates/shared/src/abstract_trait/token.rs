use crate::{
    domain::claims::{Claims, IssuedToken},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTokenService = Arc<dyn TokenServiceTrait + Send + Sync>;

#[async_trait]
pub trait TokenServiceTrait {
    async fn create_access_token(&self, user_id: i32) -> Result<IssuedToken, ServiceError>;
    /// Issues a refresh token and records it in the ledger.
    async fn create_refresh_token(&self, user_id: i32) -> Result<IssuedToken, ServiceError>;
    fn verify(&self, token: &str) -> Result<Claims, ServiceError>;
}
