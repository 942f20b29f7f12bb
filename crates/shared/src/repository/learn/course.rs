use crate::{
    abstract_trait::learn::repository::CourseRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{NewCourse, UpdateCourseRequest},
    errors::RepositoryError,
    model::course::{CourseModel, CourseOverviewModel},
};
use async_trait::async_trait;
use tracing::error;

const OVERVIEW_SELECT: &str = r#"
    SELECT
        c.course_id,
        c.title,
        c.description,
        c.instructor_id,
        u.display_name AS instructor_name,
        (SELECT COUNT(*) FROM lessons l WHERE l.course_id = c.course_id) AS lessons_count,
        c.created_at,
        c.updated_at
    FROM courses c
    JOIN users u ON u.user_id = c.instructor_id
"#;

#[derive(Clone)]
pub struct CourseRepository {
    db_pool: ConnectionPool,
}

impl CourseRepository {
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
impl CourseRepositoryTrait for CourseRepository {
    async fn find_all(&self) -> Result<Vec<CourseOverviewModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("{OVERVIEW_SELECT} ORDER BY c.created_at DESC, c.course_id DESC");

        sqlx::query_as::<_, CourseOverviewModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_all courses: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_overview_by_id(
        &self,
        course_id: i32,
    ) -> Result<Option<CourseOverviewModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("{OVERVIEW_SELECT} WHERE c.course_id = $1");

        sqlx::query_as::<_, CourseOverviewModel>(&sql)
            .bind(course_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_overview_by_id course {course_id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_id(&self, course_id: i32) -> Result<Option<CourseModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, CourseModel>(
            r#"
            SELECT course_id, title, description, instructor_id, created_at, updated_at
            FROM courses
            WHERE course_id = $1
            "#,
        )
        .bind(course_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_by_id course {course_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn create(&self, req: &NewCourse) -> Result<CourseModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, CourseModel>(
            r#"
            INSERT INTO courses (title, description, instructor_id, created_at, updated_at)
            VALUES ($1, $2, $3, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING course_id, title, description, instructor_id, created_at, updated_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.instructor_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in create course: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn update(
        &self,
        course_id: i32,
        req: &UpdateCourseRequest,
    ) -> Result<CourseModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, CourseModel>(
            r#"
            UPDATE courses
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                updated_at = CURRENT_TIMESTAMP
            WHERE course_id = $1
            RETURNING course_id, title, description, instructor_id, created_at, updated_at
            "#,
        )
        .bind(course_id)
        .bind(&req.title)
        .bind(&req.description)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in update course {course_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn delete(&self, course_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query("DELETE FROM courses WHERE course_id = $1")
            .bind(course_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in delete course {course_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
