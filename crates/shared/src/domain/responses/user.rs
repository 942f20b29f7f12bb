use crate::model::{role::Role, user::UserModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub role: Role,
    #[serde(rename = "emailVerified")]
    pub email_verified: bool,
}

impl From<UserModel> for UserResponse {
    fn from(value: UserModel) -> Self {
        UserResponse {
            id: value.user_id,
            email: value.email,
            display_name: value.display_name,
            role: value.role,
            email_verified: value.email_verified,
        }
    }
}
