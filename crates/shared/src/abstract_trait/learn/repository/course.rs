use crate::{
    domain::requests::{NewCourse, UpdateCourseRequest},
    errors::RepositoryError,
    model::course::{CourseModel, CourseOverviewModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCourseRepository = Arc<dyn CourseRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CourseRepositoryTrait {
    /// Newest first.
    async fn find_all(&self) -> Result<Vec<CourseOverviewModel>, RepositoryError>;

    async fn find_overview_by_id(
        &self,
        course_id: i32,
    ) -> Result<Option<CourseOverviewModel>, RepositoryError>;

    async fn find_by_id(&self, course_id: i32) -> Result<Option<CourseModel>, RepositoryError>;

    async fn create(&self, req: &NewCourse) -> Result<CourseModel, RepositoryError>;

    async fn update(
        &self,
        course_id: i32,
        req: &UpdateCourseRequest,
    ) -> Result<CourseModel, RepositoryError>;

    async fn delete(&self, course_id: i32) -> Result<(), RepositoryError>;
}
