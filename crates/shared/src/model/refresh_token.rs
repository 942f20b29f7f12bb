use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One issued refresh token in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RefreshTokenModel {
    pub refresh_token_id: i32,
    pub user_id: i32,
    pub token: String,
    pub expires_at: NaiveDateTime,
    pub revoked: bool,
    pub created_at: Option<NaiveDateTime>,
}

impl RefreshTokenModel {
    pub fn is_usable_at(&self, now: NaiveDateTime) -> bool {
        !self.revoked && now < self.expires_at
    }
}
