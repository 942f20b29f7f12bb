use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EnrollmentModel {
    pub enrollment_id: i32,
    pub user_id: i32,
    pub course_id: i32,
    pub completed_lessons: Vec<i32>,
    pub enrolled_at: Option<NaiveDateTime>,
    pub last_accessed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EnrollmentOverviewModel {
    pub enrollment_id: i32,
    pub course_id: i32,
    pub course_title: String,
    pub completed_lessons: Vec<i32>,
    pub total_lessons: i64,
    pub enrolled_at: Option<NaiveDateTime>,
    pub last_accessed_at: Option<NaiveDateTime>,
}

/// Rounded share of completed lessons, 0..=100. A course without lessons is 0.
pub fn completion_percentage(completed: usize, total: i64) -> i32 {
    if total <= 0 {
        return 0;
    }

    let pct = (completed as f64 * 100.0 / total as f64).round() as i32;
    pct.min(100)
}
