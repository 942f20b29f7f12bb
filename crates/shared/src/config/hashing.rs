use crate::{abstract_trait::hashing::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{DEFAULT_COST, hash, verify};
use tracing::error;

#[derive(Debug, Clone, Copy)]
pub struct Hashing {
    cost: u32,
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

impl Hashing {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Lower costs are only meant for tests.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|e| {
                error!("❌ Hashing task failed: {e:?}");
                ServiceError::InternalServerError(e.to_string())
            })?
            .map_err(ServiceError::Bcrypt)
    }

    async fn compare_password(&self, hashed: &str, password: &str) -> Result<bool, ServiceError> {
        let hashed = hashed.to_owned();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || verify(password, &hashed))
            .await
            .map_err(|e| {
                error!("❌ Password check task failed: {e:?}");
                ServiceError::InternalServerError(e.to_string())
            })?
            .map_err(ServiceError::Bcrypt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_compare() {
        let hashing = Hashing::with_cost(4);
        let hashed = hashing.hash_password("secret123").await.unwrap();

        assert_ne!(hashed, "secret123");
        assert!(hashing.compare_password(&hashed, "secret123").await.unwrap());
        assert!(!hashing.compare_password(&hashed, "wrong").await.unwrap());
    }
}
