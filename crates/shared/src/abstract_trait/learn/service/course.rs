use crate::{
    domain::{
        current_user::CurrentUser,
        requests::{
            CreateCourseRequest, CreateLessonRequest, FindLessonsRequest, UpdateCourseRequest,
        },
        responses::{
            ApiResponse, CourseDeletedResponse, CourseDetailResponse, CourseListResponse,
            CourseResponse, LessonListResponse, LessonResponse,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCourseService = Arc<dyn CourseServiceTrait + Send + Sync>;

#[async_trait]
pub trait CourseServiceTrait {
    async fn find_all(
        &self,
        viewer: &CurrentUser,
    ) -> Result<ApiResponse<CourseListResponse>, ServiceError>;

    async fn find_by_id(
        &self,
        viewer: &CurrentUser,
        course_id: i32,
    ) -> Result<ApiResponse<CourseDetailResponse>, ServiceError>;

    async fn create(
        &self,
        actor: &CurrentUser,
        req: &CreateCourseRequest,
    ) -> Result<ApiResponse<CourseResponse>, ServiceError>;

    async fn update(
        &self,
        actor: &CurrentUser,
        course_id: i32,
        req: &UpdateCourseRequest,
    ) -> Result<ApiResponse<CourseResponse>, ServiceError>;

    async fn delete(
        &self,
        actor: &CurrentUser,
        course_id: i32,
    ) -> Result<ApiResponse<CourseDeletedResponse>, ServiceError>;

    async fn create_lesson(
        &self,
        actor: &CurrentUser,
        course_id: i32,
        req: &CreateLessonRequest,
    ) -> Result<ApiResponse<LessonResponse>, ServiceError>;

    async fn find_lessons(
        &self,
        req: &FindLessonsRequest,
    ) -> Result<ApiResponse<LessonListResponse>, ServiceError>;
}
