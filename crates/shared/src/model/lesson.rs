use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LessonModel {
    pub lesson_id: i32,
    pub course_id: i32,
    pub title: String,
    pub content: String,
    pub video_url: Option<String>,
    pub order_index: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
