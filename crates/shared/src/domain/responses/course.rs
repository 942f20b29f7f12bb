use super::enrollment::ProgressResponse;
use crate::model::{course::CourseOverviewModel, lesson::LessonModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CourseResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub instructor_id: i32,
    pub instructor_name: String,
    pub lessons_count: i64,
    pub is_enrolled: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CourseListResponse {
    pub results: Vec<CourseResponse>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CourseDetailResponse {
    pub course: CourseResponse,
    pub lessons: Vec<LessonResponse>,
    pub progress: Option<ProgressResponse>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CourseDeletedResponse {
    pub id: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LessonResponse {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub content: String,
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(rename = "orderIndex")]
    pub order_index: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LessonListResponse {
    pub results: Vec<LessonResponse>,
    pub count: usize,
}

impl CourseResponse {
    pub fn from_overview(value: CourseOverviewModel, is_enrolled: bool) -> Self {
        CourseResponse {
            id: value.course_id,
            title: value.title,
            description: value.description,
            instructor_id: value.instructor_id,
            instructor_name: value.instructor_name,
            lessons_count: value.lessons_count,
            is_enrolled,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

impl From<LessonModel> for LessonResponse {
    fn from(value: LessonModel) -> Self {
        LessonResponse {
            id: value.lesson_id,
            course_id: value.course_id,
            title: value.title,
            content: value.content,
            video_url: value.video_url,
            order_index: value.order_index,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

impl From<Vec<LessonModel>> for LessonListResponse {
    fn from(value: Vec<LessonModel>) -> Self {
        let results: Vec<LessonResponse> = value.into_iter().map(LessonResponse::from).collect();
        LessonListResponse {
            count: results.len(),
            results,
        }
    }
}
