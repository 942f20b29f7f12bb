use crate::model::role::Role;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::auth::DISPLAY_NAME_PATTERN;

/// Row data for a new user; `password` is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub display_name: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct RecordLoginRequest {
    pub user_id: i32,
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
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
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleRequest {
    pub role: Role,
}
