use crate::{
    abstract_trait::jwt::JwtServiceTrait,
    config::myconfig::JwtSettings,
    domain::claims::{Claims, IssuedToken},
    errors::ServiceError,
};
use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use tracing::{debug, error};
use uuid::Uuid;

#[derive(Clone)]
pub struct JwtConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    access_token_lifetime: i64,
    refresh_token_lifetime: i64,
}

impl JwtConfig {
    pub fn new(settings: &JwtSettings) -> Self {
        let mut validation = Validation::new(settings.algorithm);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            header: Header::new(settings.algorithm),
            validation,
            access_token_lifetime: settings.access_token_lifetime,
            refresh_token_lifetime: settings.refresh_token_lifetime,
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: i32, lifetime: i64) -> Result<IssuedToken, ServiceError> {
        let iat = Utc::now().timestamp();

        let claims = Claims {
            user_id,
            iat,
            exp: iat + lifetime,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            error!("❌ Failed to sign token for user_id {user_id}: {e:?}");
            ServiceError::Jwt(e)
        })?;

        debug!("Signed token for user_id {user_id}, expires in {lifetime}s");

        Ok(IssuedToken { token, claims })
    }

    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(ServiceError::TokenExpired),
                _ => {
                    debug!("Rejected token: {e:?}");
                    Err(ServiceError::InvalidToken("Invalid token".to_string()))
                }
            },
        }
    }

    fn access_token_lifetime(&self) -> i64 {
        self.access_token_lifetime
    }

    fn refresh_token_lifetime(&self) -> i64 {
        self.refresh_token_lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig::new(&JwtSettings::new(secret, Algorithm::HS256, 3600, 604_800).unwrap())
    }

    #[test]
    fn test_expiry_is_issue_time_plus_lifetime() {
        let jwt = config("test-secret");
        let issued = jwt.generate_token(42, jwt.access_token_lifetime()).unwrap();
        let claims = jwt.verify_token(&issued.token).unwrap();

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(issued.lifetime(), 3600);
    }

    #[test]
    fn test_tokens_issued_together_differ() {
        let jwt = config("test-secret");
        let a = jwt.generate_token(1, 60).unwrap();
        let b = jwt.generate_token(1, 60).unwrap();
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_different_secrets_reject() {
        let issued = config("secret-one").generate_token(1, 60).unwrap();
        let result = config("secret-two").verify_token(&issued.token);
        assert!(matches!(result, Err(ServiceError::InvalidToken(_))));
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let jwt = config("test-secret");
        let issued = jwt.generate_token(1, -10).unwrap();
        assert!(matches!(
            jwt.verify_token(&issued.token),
            Err(ServiceError::TokenExpired)
        ));
    }

    #[test]
    fn test_garbage_is_invalid() {
        let jwt = config("test-secret");
        assert!(matches!(
            jwt.verify_token("invalid.token.here"),
            Err(ServiceError::InvalidToken(_))
        ));
    }
}
