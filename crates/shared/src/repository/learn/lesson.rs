use crate::{
    abstract_trait::learn::repository::LessonRepositoryTrait, config::ConnectionPool,
    domain::requests::NewLesson, errors::RepositoryError, model::lesson::LessonModel,
};
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct LessonRepository {
    db_pool: ConnectionPool,
}

impl LessonRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db_pool.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl LessonRepositoryTrait for LessonRepository {
    async fn find_all(&self, course_id: Option<i32>) -> Result<Vec<LessonModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, LessonModel>(
            r#"
            SELECT lesson_id, course_id, title, content, video_url, order_index,
                   created_at, updated_at
            FROM lessons
            WHERE ($1::INTEGER IS NULL OR course_id = $1)
            ORDER BY course_id, order_index, lesson_id
            "#,
        )
        .bind(course_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_all lessons: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, lesson_id: i32) -> Result<Option<LessonModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, LessonModel>(
            r#"
            SELECT lesson_id, course_id, title, content, video_url, order_index,
                   created_at, updated_at
            FROM lessons
            WHERE lesson_id = $1
            "#,
        )
        .bind(lesson_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_by_id lesson {lesson_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn count_by_course(&self, course_id: i32) -> Result<i64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM lessons WHERE course_id = $1")
            .bind(course_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in count_by_course {course_id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn create(&self, req: &NewLesson) -> Result<LessonModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, LessonModel>(
            r#"
            INSERT INTO lessons (
                course_id, title, content, video_url, order_index, created_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4,
                COALESCE(
                    $5,
                    (SELECT COALESCE(MAX(order_index) + 1, 0) FROM lessons WHERE course_id = $1)
                ),
                CURRENT_TIMESTAMP, CURRENT_TIMESTAMP
            )
            RETURNING lesson_id, course_id, title, content, video_url, order_index,
                      created_at, updated_at
            "#,
        )
        .bind(req.course_id)
        .bind(&req.title)
        .bind(&req.content)
        .bind(&req.video_url)
        .bind(req.order_index)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in create lesson: {e:?}");
            RepositoryError::from(e)
        })
    }
}
