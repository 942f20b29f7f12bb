use crate::{
    errors::RepositoryError,
    model::enrollment::{EnrollmentModel, EnrollmentOverviewModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynEnrollmentRepository = Arc<dyn EnrollmentRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait EnrollmentRepositoryTrait {
    async fn find(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<EnrollmentModel>, RepositoryError>;

    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<EnrollmentOverviewModel>, RepositoryError>;

    /// Returns the enrollment and whether this call created it.
    async fn get_or_create(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<(EnrollmentModel, bool), RepositoryError>;

    /// Adds `lesson_id` once and touches `last_accessed_at`; `None` when not enrolled.
    async fn complete_lesson(
        &self,
        user_id: i32,
        course_id: i32,
        lesson_id: i32,
    ) -> Result<Option<EnrollmentModel>, RepositoryError>;
}
