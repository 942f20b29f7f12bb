use crate::{
    domain::claims::{Claims, IssuedToken},
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait {
    /// Signs a token for `user_id` that expires `lifetime` seconds after issue.
    fn generate_token(&self, user_id: i32, lifetime: i64) -> Result<IssuedToken, ServiceError>;
    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError>;
    fn access_token_lifetime(&self) -> i64;
    fn refresh_token_lifetime(&self) -> i64;
}
