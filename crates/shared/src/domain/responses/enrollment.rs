use crate::model::enrollment::{EnrollmentModel, EnrollmentOverviewModel, completion_percentage};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct EnrollmentResponse {
    pub id: i32,
    pub course_id: i32,
    pub course_title: String,
    pub completed_lessons: Vec<i32>,
    pub total_lessons: i64,
    pub completion_percentage: i32,
    pub enrolled_at: Option<String>,
    pub last_accessed_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct EnrollResponse {
    /// False when the caller was already enrolled.
    #[serde(skip)]
    pub created: bool,
    pub enrollment: EnrollmentResponse,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct EnrollmentListResponse {
    pub results: Vec<EnrollmentResponse>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct ProgressResponse {
    pub course_id: i32,
    pub completed_lessons: Vec<i32>,
    pub total_lessons: i64,
    pub completion_percentage: i32,
    pub enrolled_at: Option<String>,
    pub last_accessed_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LessonCompleteResponse {
    pub lesson_id: i32,
    pub progress: ProgressResponse,
}

impl From<EnrollmentOverviewModel> for EnrollmentResponse {
    fn from(value: EnrollmentOverviewModel) -> Self {
        EnrollmentResponse {
            id: value.enrollment_id,
            course_id: value.course_id,
            course_title: value.course_title,
            completion_percentage: completion_percentage(
                value.completed_lessons.len(),
                value.total_lessons,
            ),
            completed_lessons: value.completed_lessons,
            total_lessons: value.total_lessons,
            enrolled_at: value.enrolled_at.map(|dt| dt.to_string()),
            last_accessed_at: value.last_accessed_at.map(|dt| dt.to_string()),
        }
    }
}

impl ProgressResponse {
    pub fn new(enrollment: EnrollmentModel, total_lessons: i64) -> Self {
        ProgressResponse {
            course_id: enrollment.course_id,
            completion_percentage: completion_percentage(
                enrollment.completed_lessons.len(),
                total_lessons,
            ),
            completed_lessons: enrollment.completed_lessons,
            total_lessons,
            enrolled_at: enrollment.enrolled_at.map(|dt| dt.to_string()),
            last_accessed_at: enrollment.last_accessed_at.map(|dt| dt.to_string()),
        }
    }
}
