use crate::{domain::requests::NewLesson, errors::RepositoryError, model::lesson::LessonModel};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynLessonRepository = Arc<dyn LessonRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait LessonRepositoryTrait {
    /// Ordered by course, then `order_index`.
    async fn find_all(&self, course_id: Option<i32>) -> Result<Vec<LessonModel>, RepositoryError>;

    async fn find_by_id(&self, lesson_id: i32) -> Result<Option<LessonModel>, RepositoryError>;

    async fn count_by_course(&self, course_id: i32) -> Result<i64, RepositoryError>;

    async fn create(&self, req: &NewLesson) -> Result<LessonModel, RepositoryError>;
}
