use crate::{
    abstract_trait::learn::{
        repository::{DynCourseRepository, DynEnrollmentRepository, DynLessonRepository},
        service::EnrollmentServiceTrait,
    },
    domain::responses::{
        ApiResponse, EnrollResponse, EnrollmentListResponse, EnrollmentResponse,
        LessonCompleteResponse, ProgressResponse,
    },
    errors::ServiceError,
    model::enrollment::EnrollmentOverviewModel,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct EnrollmentService {
    course: DynCourseRepository,
    lesson: DynLessonRepository,
    enrollment: DynEnrollmentRepository,
    metrics: Metrics,
}

fn not_enrolled() -> ServiceError {
    ServiceError::NotFound("Not enrolled in this course".to_string())
}

impl EnrollmentService {
    pub fn new(
        course: DynCourseRepository,
        lesson: DynLessonRepository,
        enrollment: DynEnrollmentRepository,
        metrics: Metrics,
    ) -> Self {
        Self {
            course,
            lesson,
            enrollment,
            metrics,
        }
    }

    async fn enroll_user(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<ApiResponse<EnrollResponse>, ServiceError> {
        let course = self
            .course
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Course not found".to_string()))?;

        let (enrollment, created) = self
            .enrollment
            .get_or_create(user_id, course_id)
            .await
            .map_err(|e| {
                error!("❌ Failed to enroll user {user_id} in course {course_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        let total_lessons = self.lesson.count_by_course(course_id).await?;

        let message = if created {
            info!("🎓 User {user_id} enrolled in course {course_id}");
            "Enrolled successfully"
        } else {
            "Already enrolled"
        };

        let overview = EnrollmentOverviewModel {
            enrollment_id: enrollment.enrollment_id,
            course_id,
            course_title: course.title,
            completed_lessons: enrollment.completed_lessons,
            total_lessons,
            enrolled_at: enrollment.enrolled_at,
            last_accessed_at: enrollment.last_accessed_at,
        };

        Ok(ApiResponse::success(
            message,
            EnrollResponse {
                created,
                enrollment: EnrollmentResponse::from(overview),
            },
        ))
    }

    async fn mark_complete(
        &self,
        user_id: i32,
        lesson_id: i32,
    ) -> Result<ApiResponse<LessonCompleteResponse>, ServiceError> {
        let lesson = self
            .lesson
            .find_by_id(lesson_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Lesson not found".to_string()))?;

        let enrollment = self
            .enrollment
            .complete_lesson(user_id, lesson.course_id, lesson_id)
            .await?
            .ok_or_else(not_enrolled)?;

        let total_lessons = self.lesson.count_by_course(lesson.course_id).await?;

        info!("✅ User {user_id} completed lesson {lesson_id}");

        Ok(ApiResponse::success(
            "Lesson marked as completed",
            LessonCompleteResponse {
                lesson_id,
                progress: ProgressResponse::new(enrollment, total_lessons),
            },
        ))
    }
}

#[async_trait]
impl EnrollmentServiceTrait for EnrollmentService {
    async fn enroll(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<ApiResponse<EnrollResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.enroll_user(user_id, course_id).await;
        self.metrics
            .record_result("enroll", Method::Post, started, &result);
        result
    }

    async fn progress(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<ApiResponse<ProgressResponse>, ServiceError> {
        let enrollment = self
            .enrollment
            .find(user_id, course_id)
            .await?
            .ok_or_else(not_enrolled)?;

        let total_lessons = self.lesson.count_by_course(course_id).await?;

        Ok(ApiResponse::success(
            "Progress retrieved successfully",
            ProgressResponse::new(enrollment, total_lessons),
        ))
    }

    async fn complete_lesson(
        &self,
        user_id: i32,
        lesson_id: i32,
    ) -> Result<ApiResponse<LessonCompleteResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.mark_complete(user_id, lesson_id).await;
        self.metrics
            .record_result("complete_lesson", Method::Post, started, &result);
        result
    }

    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<EnrollmentListResponse>, ServiceError> {
        let results: Vec<EnrollmentResponse> = self
            .enrollment
            .find_by_user(user_id)
            .await?
            .into_iter()
            .map(EnrollmentResponse::from)
            .collect();

        Ok(ApiResponse::success(
            "Enrollments retrieved successfully",
            EnrollmentListResponse {
                count: results.len(),
                results,
            },
        ))
    }
}
