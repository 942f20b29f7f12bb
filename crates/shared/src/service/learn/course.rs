use crate::{
    abstract_trait::learn::{
        repository::{DynCourseRepository, DynEnrollmentRepository, DynLessonRepository},
        service::CourseServiceTrait,
    },
    domain::{
        current_user::CurrentUser,
        requests::{
            CreateCourseRequest, CreateLessonRequest, FindLessonsRequest, NewCourse, NewLesson,
            UpdateCourseRequest,
        },
        responses::{
            ApiResponse, CourseDeletedResponse, CourseDetailResponse, CourseListResponse,
            CourseResponse, LessonListResponse, LessonResponse, ProgressResponse,
        },
    },
    errors::{ServiceError, format_validation_errors},
    model::{course::CourseModel, role::Role},
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use std::collections::HashSet;
use tokio::time::Instant;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct CourseService {
    course: DynCourseRepository,
    lesson: DynLessonRepository,
    enrollment: DynEnrollmentRepository,
    metrics: Metrics,
}

impl CourseService {
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

    async fn require_course(&self, course_id: i32) -> Result<CourseModel, ServiceError> {
        self.course
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Course not found".to_string()))
    }

    async fn course_response(
        &self,
        viewer: &CurrentUser,
        course_id: i32,
    ) -> Result<CourseResponse, ServiceError> {
        let overview = self
            .course
            .find_overview_by_id(course_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Course not found".to_string()))?;

        let is_enrolled = self.enrollment.find(viewer.id, course_id).await?.is_some();

        Ok(CourseResponse::from_overview(overview, is_enrolled))
    }

    async fn create_course(
        &self,
        actor: &CurrentUser,
        req: &CreateCourseRequest,
    ) -> Result<ApiResponse<CourseResponse>, ServiceError> {
        actor.require_role(&[Role::Instructor, Role::Admin])?;

        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(format_validation_errors(&errors)));
        }

        let course = self
            .course
            .create(&NewCourse {
                instructor_id: actor.id,
                title: req.title.trim().to_string(),
                description: req.description.clone(),
            })
            .await
            .map_err(|e| {
                error!("❌ Failed to create course: {e:?}");
                ServiceError::Repo(e)
            })?;

        info!("📚 Course {} created by user {}", course.course_id, actor.id);

        let response = self.course_response(actor, course.course_id).await?;
        Ok(ApiResponse::success("Course created successfully", response))
    }

    async fn update_course(
        &self,
        actor: &CurrentUser,
        course_id: i32,
        req: &UpdateCourseRequest,
    ) -> Result<ApiResponse<CourseResponse>, ServiceError> {
        let course = self.require_course(course_id).await?;
        actor.require_owner_or_admin(course.instructor_id)?;

        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(format_validation_errors(&errors)));
        }

        self.course.update(course_id, req).await?;

        info!("✏️ Course {course_id} updated by user {}", actor.id);

        let response = self.course_response(actor, course_id).await?;
        Ok(ApiResponse::success("Course updated successfully", response))
    }

    async fn delete_course(
        &self,
        actor: &CurrentUser,
        course_id: i32,
    ) -> Result<ApiResponse<CourseDeletedResponse>, ServiceError> {
        let course = self.require_course(course_id).await?;
        actor.require_owner_or_admin(course.instructor_id)?;

        self.course.delete(course_id).await?;

        info!("🗑️ Course {course_id} deleted by user {}", actor.id);

        Ok(ApiResponse::success(
            "Course deleted successfully",
            CourseDeletedResponse { id: course_id },
        ))
    }
}

#[async_trait]
impl CourseServiceTrait for CourseService {
    async fn find_all(
        &self,
        viewer: &CurrentUser,
    ) -> Result<ApiResponse<CourseListResponse>, ServiceError> {
        let courses = self.course.find_all().await?;

        let enrolled: HashSet<i32> = self
            .enrollment
            .find_by_user(viewer.id)
            .await?
            .into_iter()
            .map(|e| e.course_id)
            .collect();

        let results: Vec<CourseResponse> = courses
            .into_iter()
            .map(|c| {
                let is_enrolled = enrolled.contains(&c.course_id);
                CourseResponse::from_overview(c, is_enrolled)
            })
            .collect();

        Ok(ApiResponse::success(
            "Courses retrieved successfully",
            CourseListResponse {
                count: results.len(),
                results,
            },
        ))
    }

    async fn find_by_id(
        &self,
        viewer: &CurrentUser,
        course_id: i32,
    ) -> Result<ApiResponse<CourseDetailResponse>, ServiceError> {
        let course = self.course_response(viewer, course_id).await?;

        let lessons: Vec<LessonResponse> = self
            .lesson
            .find_all(Some(course_id))
            .await?
            .into_iter()
            .map(LessonResponse::from)
            .collect();

        let progress = self
            .enrollment
            .find(viewer.id, course_id)
            .await?
            .map(|enrollment| ProgressResponse::new(enrollment, lessons.len() as i64));

        Ok(ApiResponse::success(
            "Course retrieved successfully",
            CourseDetailResponse {
                course,
                lessons,
                progress,
            },
        ))
    }

    async fn create(
        &self,
        actor: &CurrentUser,
        req: &CreateCourseRequest,
    ) -> Result<ApiResponse<CourseResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.create_course(actor, req).await;
        self.metrics
            .record_result("create_course", Method::Post, started, &result);
        result
    }

    async fn update(
        &self,
        actor: &CurrentUser,
        course_id: i32,
        req: &UpdateCourseRequest,
    ) -> Result<ApiResponse<CourseResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.update_course(actor, course_id, req).await;
        self.metrics
            .record_result("update_course", Method::Put, started, &result);
        result
    }

    async fn delete(
        &self,
        actor: &CurrentUser,
        course_id: i32,
    ) -> Result<ApiResponse<CourseDeletedResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.delete_course(actor, course_id).await;
        self.metrics
            .record_result("delete_course", Method::Delete, started, &result);
        result
    }

    async fn create_lesson(
        &self,
        actor: &CurrentUser,
        course_id: i32,
        req: &CreateLessonRequest,
    ) -> Result<ApiResponse<LessonResponse>, ServiceError> {
        let course = self.require_course(course_id).await?;
        actor.require_owner_or_admin(course.instructor_id)?;

        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(format_validation_errors(&errors)));
        }

        let lesson = self
            .lesson
            .create(&NewLesson {
                course_id,
                title: req.title.trim().to_string(),
                content: req.content.clone(),
                video_url: req.video_url.clone(),
                order_index: req.order_index,
            })
            .await
            .map_err(|e| {
                error!("❌ Failed to create lesson in course {course_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        info!("📝 Lesson {} added to course {course_id}", lesson.lesson_id);

        Ok(ApiResponse::success(
            "Lesson created successfully",
            LessonResponse::from(lesson),
        ))
    }

    async fn find_lessons(
        &self,
        req: &FindLessonsRequest,
    ) -> Result<ApiResponse<LessonListResponse>, ServiceError> {
        let lessons = self.lesson.find_all(req.course_id).await?;

        Ok(ApiResponse::success(
            "Lessons retrieved successfully",
            LessonListResponse::from(lessons),
        ))
    }
}
