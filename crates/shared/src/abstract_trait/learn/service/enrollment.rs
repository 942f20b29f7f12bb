use crate::{
    domain::responses::{
        ApiResponse, EnrollResponse, EnrollmentListResponse, LessonCompleteResponse,
        ProgressResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynEnrollmentService = Arc<dyn EnrollmentServiceTrait + Send + Sync>;

#[async_trait]
pub trait EnrollmentServiceTrait {
    async fn enroll(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<ApiResponse<EnrollResponse>, ServiceError>;

    async fn progress(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<ApiResponse<ProgressResponse>, ServiceError>;

    async fn complete_lesson(
        &self,
        user_id: i32,
        lesson_id: i32,
    ) -> Result<ApiResponse<LessonCompleteResponse>, ServiceError>;

    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<EnrollmentListResponse>, ServiceError>;
}
