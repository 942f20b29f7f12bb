use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 200, message = "Title must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateLessonRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[serde(rename = "videoUrl", default)]
    #[validate(url(message = "Video URL must be a valid URL"))]
    pub video_url: Option<String>,

    #[serde(rename = "orderIndex", default)]
    #[validate(range(min = 0, message = "Order index must not be negative"))]
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindLessonsRequest {
    pub course_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub instructor_id: i32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewLesson {
    pub course_id: i32,
    pub title: String,
    pub content: String,
    pub video_url: Option<String>,
    /// Appended after the last lesson when absent.
    pub order_index: Option<i32>,
}
