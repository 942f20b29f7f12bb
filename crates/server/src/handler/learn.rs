use crate::{
    middleware::{jwt, path::SimplePath, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::learn::service::{DynCourseService, DynEnrollmentService},
    domain::{
        current_user::CurrentUser,
        requests::{
            CreateCourseRequest, CreateLessonRequest, FindLessonsRequest, UpdateCourseRequest,
        },
        responses::{
            ApiResponse, CourseDeletedResponse, CourseDetailResponse, CourseListResponse,
            CourseResponse, EnrollResponse, EnrollmentListResponse, LessonCompleteResponse,
            LessonListResponse, LessonResponse, ProgressResponse,
        },
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/learn/courses/",
    responses(
        (status = 200, description = "Courses, newest first", body = ApiResponse<CourseListResponse>)
    ),
    security(("bearer_auth" = [])),
    tag = "Learn"
)]
pub async fn get_courses(
    Extension(service): Extension<DynCourseService>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(&current_user).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/learn/courses/",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = ApiResponse<CourseResponse>),
        (status = 403, description = "Instructor or admin only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Learn"
)]
pub async fn create_course(
    Extension(service): Extension<DynCourseService>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCourseRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&current_user, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/learn/courses/{id}/",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course with lessons", body = ApiResponse<CourseDetailResponse>),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Learn"
)]
pub async fn get_course(
    Extension(service): Extension<DynCourseService>,
    Extension(current_user): Extension<CurrentUser>,
    SimplePath(id): SimplePath<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(&current_user, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/api/learn/courses/{id}/",
    params(("id" = i32, Path, description = "Course ID")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = ApiResponse<CourseResponse>),
        (status = 403, description = "Not the course owner", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Learn"
)]
pub async fn update_course(
    Extension(service): Extension<DynCourseService>,
    Extension(current_user): Extension<CurrentUser>,
    SimplePath(id): SimplePath<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCourseRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update(&current_user, id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/learn/courses/{id}/",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course deleted", body = ApiResponse<CourseDeletedResponse>),
        (status = 403, description = "Not the course owner", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Learn"
)]
pub async fn delete_course(
    Extension(service): Extension<DynCourseService>,
    Extension(current_user): Extension<CurrentUser>,
    SimplePath(id): SimplePath<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(&current_user, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/learn/courses/{id}/lessons/",
    params(("id" = i32, Path, description = "Course ID")),
    request_body = CreateLessonRequest,
    responses(
        (status = 201, description = "Lesson created", body = ApiResponse<LessonResponse>),
        (status = 403, description = "Not the course owner", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Learn"
)]
pub async fn create_lesson(
    Extension(service): Extension<DynCourseService>,
    Extension(current_user): Extension<CurrentUser>,
    SimplePath(id): SimplePath<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateLessonRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create_lesson(&current_user, id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/learn/lessons/",
    params(FindLessonsRequest),
    responses(
        (status = 200, description = "Lessons by course and order", body = ApiResponse<LessonListResponse>)
    ),
    security(("bearer_auth" = [])),
    tag = "Learn"
)]
pub async fn get_lessons(
    Extension(service): Extension<DynCourseService>,
    Query(params): Query<FindLessonsRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_lessons(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/learn/courses/{id}/enroll/",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 201, description = "Enrolled", body = ApiResponse<EnrollResponse>),
        (status = 200, description = "Already enrolled", body = ApiResponse<EnrollResponse>),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Learn"
)]
pub async fn enroll(
    Extension(service): Extension<DynEnrollmentService>,
    Extension(current_user): Extension<CurrentUser>,
    SimplePath(id): SimplePath<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.enroll(current_user.id, id).await?;

    let status = if response.data.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/learn/courses/{id}/progress/",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Caller's progress", body = ApiResponse<ProgressResponse>),
        (status = 404, description = "Not enrolled", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Learn"
)]
pub async fn get_progress(
    Extension(service): Extension<DynEnrollmentService>,
    Extension(current_user): Extension<CurrentUser>,
    SimplePath(id): SimplePath<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.progress(current_user.id, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/learn/lessons/{id}/complete/",
    params(("id" = i32, Path, description = "Lesson ID")),
    responses(
        (status = 200, description = "Lesson marked complete", body = ApiResponse<LessonCompleteResponse>),
        (status = 404, description = "Lesson or enrollment not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Learn"
)]
pub async fn complete_lesson(
    Extension(service): Extension<DynEnrollmentService>,
    Extension(current_user): Extension<CurrentUser>,
    SimplePath(id): SimplePath<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.complete_lesson(current_user.id, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/learn/enrollments/",
    responses(
        (status = 200, description = "Caller's enrollments", body = ApiResponse<EnrollmentListResponse>)
    ),
    security(("bearer_auth" = [])),
    tag = "Learn"
)]
pub async fn get_enrollments(
    Extension(service): Extension<DynEnrollmentService>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_user(current_user.id).await?;
    Ok(Json(response))
}

pub fn learn_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/learn/courses/", get(get_courses).post(create_course))
        .route(
            "/api/learn/courses/{id}/",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route("/api/learn/courses/{id}/lessons/", post(create_lesson))
        .route("/api/learn/courses/{id}/enroll/", post(enroll))
        .route("/api/learn/courses/{id}/progress/", get(get_progress))
        .route("/api/learn/lessons/", get(get_lessons))
        .route("/api/learn/lessons/{id}/complete/", post(complete_lesson))
        .route("/api/learn/enrollments/", get(get_enrollments))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .layer(Extension(app_state.di_container.course_service.clone()))
        .layer(Extension(app_state.di_container.enrollment_service.clone()))
}
