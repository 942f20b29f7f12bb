use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseModel {
    pub course_id: i32,
    pub title: String,
    pub description: String,
    pub instructor_id: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Course row joined with its instructor and lesson count.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseOverviewModel {
    pub course_id: i32,
    pub title: String,
    pub description: String,
    pub instructor_id: i32,
    pub instructor_name: String,
    pub lessons_count: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
