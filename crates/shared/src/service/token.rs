use crate::{
    abstract_trait::{
        jwt::DynJwtService, refresh_token::command::DynRefreshTokenCommandRepository,
        token::TokenServiceTrait,
    },
    domain::{
        claims::{Claims, IssuedToken},
        requests::CreateRefreshToken,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::DateTime;
use tracing::{error, info};

pub struct TokenService {
    jwt: DynJwtService,
    refresh: DynRefreshTokenCommandRepository,
}

impl TokenService {
    pub fn new(jwt: DynJwtService, refresh: DynRefreshTokenCommandRepository) -> Self {
        Self { jwt, refresh }
    }
}

#[async_trait]
impl TokenServiceTrait for TokenService {
    async fn create_access_token(&self, user_id: i32) -> Result<IssuedToken, ServiceError> {
        match self
            .jwt
            .generate_token(user_id, self.jwt.access_token_lifetime())
        {
            Ok(issued) => {
                info!("✅ Generated access token for user_id: {user_id}");
                Ok(issued)
            }
            Err(e) => {
                error!("❌ Failed to generate access token for user_id {user_id}: {e:?}");
                Err(e)
            }
        }
    }

    async fn create_refresh_token(&self, user_id: i32) -> Result<IssuedToken, ServiceError> {
        let issued = self
            .jwt
            .generate_token(user_id, self.jwt.refresh_token_lifetime())?;

        let expires_at = DateTime::from_timestamp(issued.claims.exp, 0)
            .ok_or_else(|| {
                ServiceError::InternalServerError("refresh token expiry out of range".into())
            })?
            .naive_utc();

        let req = CreateRefreshToken {
            user_id,
            token: issued.token.clone(),
            expires_at,
        };

        match self.refresh.create(&req).await {
            Ok(_) => {
                info!("✅ Created refresh token for user_id {user_id}");
                Ok(issued)
            }
            Err(e) => {
                error!("❌ Failed to store refresh token: {e:?}");
                Err(ServiceError::from(e))
            }
        }
    }

    fn verify(&self, token: &str) -> Result<Claims, ServiceError> {
        self.jwt.verify_token(token)
    }
}
