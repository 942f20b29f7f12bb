use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct CreateRefreshToken {
    pub user_id: i32,
    pub token: String,
    pub expires_at: NaiveDateTime,
}
