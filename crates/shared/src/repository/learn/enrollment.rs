use crate::{
    abstract_trait::learn::repository::EnrollmentRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::enrollment::{EnrollmentModel, EnrollmentOverviewModel},
};
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct EnrollmentRepository {
    db_pool: ConnectionPool,
}

impl EnrollmentRepository {
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
impl EnrollmentRepositoryTrait for EnrollmentRepository {
    async fn find(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<EnrollmentModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, EnrollmentModel>(
            r#"
            SELECT enrollment_id, user_id, course_id, completed_lessons,
                   enrolled_at, last_accessed_at
            FROM enrollments
            WHERE user_id = $1 AND course_id = $2
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find enrollment: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<EnrollmentOverviewModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, EnrollmentOverviewModel>(
            r#"
            SELECT
                e.enrollment_id,
                e.course_id,
                c.title AS course_title,
                e.completed_lessons,
                (SELECT COUNT(*) FROM lessons l WHERE l.course_id = e.course_id) AS total_lessons,
                e.enrolled_at,
                e.last_accessed_at
            FROM enrollments e
            JOIN courses c ON c.course_id = e.course_id
            WHERE e.user_id = $1
            ORDER BY e.last_accessed_at DESC, e.enrollment_id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_by_user enrollments {user_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn get_or_create(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<(EnrollmentModel, bool), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let inserted = sqlx::query_as::<_, EnrollmentModel>(
            r#"
            INSERT INTO enrollments (user_id, course_id, enrolled_at, last_accessed_at)
            VALUES ($1, $2, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            ON CONFLICT (user_id, course_id) DO NOTHING
            RETURNING enrollment_id, user_id, course_id, completed_lessons,
                      enrolled_at, last_accessed_at
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in create enrollment: {e:?}");
            RepositoryError::from(e)
        })?;

        if let Some(enrollment) = inserted {
            return Ok((enrollment, true));
        }

        let existing = sqlx::query_as::<_, EnrollmentModel>(
            r#"
            SELECT enrollment_id, user_id, course_id, completed_lessons,
                   enrolled_at, last_accessed_at
            FROM enrollments
            WHERE user_id = $1 AND course_id = $2
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in get enrollment: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok((existing, false))
    }

    async fn complete_lesson(
        &self,
        user_id: i32,
        course_id: i32,
        lesson_id: i32,
    ) -> Result<Option<EnrollmentModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, EnrollmentModel>(
            r#"
            UPDATE enrollments
            SET
                completed_lessons = CASE
                    WHEN $3 = ANY(completed_lessons) THEN completed_lessons
                    ELSE array_append(completed_lessons, $3)
                END,
                last_accessed_at = CURRENT_TIMESTAMP
            WHERE user_id = $1 AND course_id = $2
            RETURNING enrollment_id, user_id, course_id, completed_lessons,
                      enrolled_at, last_accessed_at
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .bind(lesson_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in complete_lesson {lesson_id}: {e:?}");
            RepositoryError::from(e)
        })
    }
}
