use anyhow::{Context, Result, anyhow};
use jsonwebtoken::Algorithm;
use std::str::FromStr;

const DEFAULT_ACCESS_TOKEN_LIFETIME: i64 = 3600;
const DEFAULT_REFRESH_TOKEN_LIFETIME: i64 = 604_800;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,
    pub port: u16,
    pub is_dev: bool,
    pub jwt: JwtSettings,
}

/// Signing parameters shared by token issuance and verification.
#[derive(Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_token_lifetime: i64,
    pub refresh_token_lifetime: i64,
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("access_token_lifetime", &self.access_token_lifetime)
            .field("refresh_token_lifetime", &self.refresh_token_lifetime)
            .finish()
    }
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").context("Missing env: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing env: PORT")?;

        let run_migrations = parse_bool("RUN_MIGRATIONS", &run_migrations_str)?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let database_max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a valid u32 integer")?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let is_dev = match std::env::var("APP_ENV") {
            Ok(value) => match value.as_str() {
                "development" => true,
                "production" => false,
                other => {
                    return Err(anyhow!(
                        "APP_ENV must be 'development' or 'production', got '{other}'",
                    ));
                }
            },
            Err(_) => true,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            run_migrations,
            port,
            is_dev,
            jwt: JwtSettings::from_env()?,
        })
    }
}

impl JwtSettings {
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var("JWT_SECRET").context("Missing env: JWT_SECRET")?;

        let algorithm = match std::env::var("JWT_ALGORITHM") {
            Ok(value) => parse_algorithm(&value)?,
            Err(_) => Algorithm::HS256,
        };

        let access_token_lifetime =
            lifetime_from_env("JWT_ACCESS_TOKEN_LIFETIME", DEFAULT_ACCESS_TOKEN_LIFETIME)?;
        let refresh_token_lifetime =
            lifetime_from_env("JWT_REFRESH_TOKEN_LIFETIME", DEFAULT_REFRESH_TOKEN_LIFETIME)?;

        Self::new(
            secret,
            algorithm,
            access_token_lifetime,
            refresh_token_lifetime,
        )
    }

    pub fn new(
        secret: impl Into<String>,
        algorithm: Algorithm,
        access_token_lifetime: i64,
        refresh_token_lifetime: i64,
    ) -> Result<Self> {
        let secret = secret.into();

        if secret.is_empty() {
            return Err(anyhow!("JWT_SECRET must not be empty"));
        }

        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(anyhow!(
                "JWT_ALGORITHM must be a symmetric HMAC algorithm, got {algorithm:?}"
            ));
        }

        if access_token_lifetime <= 0 || refresh_token_lifetime <= 0 {
            return Err(anyhow!("token lifetimes must be positive"));
        }

        Ok(Self {
            secret,
            algorithm,
            access_token_lifetime,
            refresh_token_lifetime,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

fn parse_algorithm(value: &str) -> Result<Algorithm> {
    Algorithm::from_str(value.trim())
        .map_err(|e| anyhow!("JWT_ALGORITHM '{value}' is not a known algorithm: {e}"))
}

fn lifetime_from_env(name: &str, default: i64) -> Result<i64> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<i64>()
            .context(format!("{name} must be an integer number of seconds")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_asymmetric_algorithms() {
        let result = JwtSettings::new("secret", Algorithm::RS256, 60, 120);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_positive_lifetimes() {
        assert!(JwtSettings::new("secret", Algorithm::HS256, 0, 120).is_err());
        assert!(JwtSettings::new("secret", Algorithm::HS256, 60, -1).is_err());
    }

    #[test]
    fn parses_hmac_algorithm_names() {
        assert_eq!(parse_algorithm("HS512").unwrap(), Algorithm::HS512);
        assert!(parse_algorithm("none").is_err());
    }

    #[test]
    fn debug_output_hides_secret() {
        let settings = JwtSettings::new("super-secret", Algorithm::HS256, 60, 120).unwrap();
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
