use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::Validate;

pub(crate) static DISPLAY_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s\-_]+$").expect("valid display name pattern"));

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(rename = "displayName")]
    #[validate(
        length(
            min = 2,
            max = 100,
            message = "Display name must be between 2 and 100 characters"
        ),
        regex(
            path = *DISPLAY_NAME_PATTERN,
            message = "Display name can only contain letters, numbers, spaces, hyphens, and underscores"
        )
    )]
    pub display_name: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_accepts_typical_signup() {
        let req = RegisterRequest {
            email: "alice@example.com".into(),
            display_name: "Alice".into(),
            password: "secret123".into(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn register_request_rejects_bad_fields() {
        let req = RegisterRequest {
            email: "not-an-email".into(),
            display_name: "<script>".into(),
            password: "123".into(),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("display_name"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn register_request_reads_camel_case_display_name() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"bob@example.com","displayName":"Bob","password":"hunter22"}"#,
        )
        .unwrap();
        assert_eq!(req.display_name, "Bob");
    }
}
