mod common;

use axum::http::{Method, StatusCode};
use common::{Session, TestApp, error_code};
use serde_json::{Value, json};
use shared::model::role::Role;

async fn instructor(app: &TestApp, email: &str, name: &str) -> Session {
    let session = app.sign_up(email, name).await;
    app.promote(session.user_id, Role::Instructor).await;
    session
}

async fn create_course(app: &TestApp, token: &str, title: &str) -> i64 {
    let response = app
        .post(
            "/api/learn/courses/",
            Some(token),
            json!({ "title": title, "description": "An introduction" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
    response.json()["id"].as_i64().unwrap()
}

async fn create_lesson(app: &TestApp, token: &str, course_id: i64, body: Value) -> i64 {
    let response = app
        .post(
            &format!("/api/learn/courses/{course_id}/lessons/"),
            Some(token),
            body,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
    response.json()["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_learn_routes_require_bearer_token() {
    let app = TestApp::new();

    let response = app.get("/api/learn/courses/", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&response), "AUTH_REQUIRED");
}

#[tokio::test]
async fn test_only_instructors_create_courses() {
    let app = TestApp::new();
    let student = app.sign_up("student@example.com", "Student").await;

    let response = app
        .post(
            "/api/learn/courses/",
            Some(&student.access_token),
            json!({ "title": "Rust", "description": "Systems programming" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(error_code(&response), "FORBIDDEN");
}

#[tokio::test]
async fn test_course_listing_and_detail() {
    let app = TestApp::new();
    let tutor = instructor(&app, "tutor@example.com", "Tutor Tom").await;
    let first = create_course(&app, &tutor.access_token, "Rust Basics").await;
    let second = create_course(&app, &tutor.access_token, "Async Rust").await;

    create_lesson(
        &app,
        &tutor.access_token,
        first,
        json!({ "title": "Second", "content": "Borrowing", "orderIndex": 2 }),
    )
    .await;
    create_lesson(
        &app,
        &tutor.access_token,
        first,
        json!({
            "title": "First",
            "content": "Ownership",
            "videoUrl": "https://videos.example.com/ownership",
            "orderIndex": 1
        }),
    )
    .await;

    let viewer = app.sign_up("viewer@example.com", "Viewer").await;

    let list = app.get("/api/learn/courses/", Some(&viewer.access_token)).await;
    assert_eq!(list.status, StatusCode::OK);

    let body = list.json();
    assert_eq!(body["count"], 2);
    assert_eq!(body["results"][0]["id"], second);
    assert_eq!(body["results"][1]["id"], first);
    assert_eq!(body["results"][1]["lessons_count"], 2);
    assert_eq!(body["results"][1]["instructor_name"], "Tutor Tom");
    assert_eq!(body["results"][1]["is_enrolled"], false);

    let detail = app
        .get(&format!("/api/learn/courses/{first}/"), Some(&viewer.access_token))
        .await;
    assert_eq!(detail.status, StatusCode::OK);

    let body = detail.json();
    assert_eq!(body["course"]["title"], "Rust Basics");
    assert_eq!(body["lessons"][0]["title"], "First");
    assert_eq!(body["lessons"][0]["orderIndex"], 1);
    assert_eq!(
        body["lessons"][0]["videoUrl"],
        "https://videos.example.com/ownership"
    );
    assert_eq!(body["lessons"][1]["title"], "Second");
    assert!(body["progress"].is_null());

    let lessons = app
        .get(
            &format!("/api/learn/lessons/?course_id={second}"),
            Some(&viewer.access_token),
        )
        .await;
    assert_eq!(lessons.status, StatusCode::OK);
    assert_eq!(lessons.json()["count"], 0);

    let all_lessons = app.get("/api/learn/lessons/", Some(&viewer.access_token)).await;
    assert_eq!(all_lessons.json()["count"], 2);

    let missing = app
        .get("/api/learn/courses/9999/", Some(&viewer.access_token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&missing), "NOT_FOUND");
}

#[tokio::test]
async fn test_course_changes_are_owner_only() {
    let app = TestApp::new();
    let owner = instructor(&app, "owner@example.com", "Owner").await;
    let rival = instructor(&app, "rival@example.com", "Rival").await;
    let course = create_course(&app, &owner.access_token, "Databases").await;
    let uri = format!("/api/learn/courses/{course}/");

    let hijack = app
        .send(
            Method::PUT,
            &uri,
            Some(&rival.access_token),
            Some(json!({ "title": "Mine now" })),
        )
        .await;
    assert_eq!(hijack.status, StatusCode::FORBIDDEN);

    let foreign_lesson = app
        .post(
            &format!("/api/learn/courses/{course}/lessons/"),
            Some(&rival.access_token),
            json!({ "title": "Spam", "content": "Spam" }),
        )
        .await;
    assert_eq!(foreign_lesson.status, StatusCode::FORBIDDEN);

    let updated = app
        .send(
            Method::PUT,
            &uri,
            Some(&owner.access_token),
            Some(json!({ "title": "Relational Databases" })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json()["title"], "Relational Databases");
    assert_eq!(updated.json()["description"], "An introduction");

    let rival_delete = app
        .send(Method::DELETE, &uri, Some(&rival.access_token), None)
        .await;
    assert_eq!(rival_delete.status, StatusCode::FORBIDDEN);

    let deleted = app
        .send(Method::DELETE, &uri, Some(&owner.access_token), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.json()["id"], course);

    let gone = app.get(&uri, Some(&owner.access_token)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_enrollment_and_progress() {
    let app = TestApp::new();
    let tutor = instructor(&app, "prof@example.com", "Prof").await;
    let course = create_course(&app, &tutor.access_token, "Networking").await;
    let lesson_a = create_lesson(
        &app,
        &tutor.access_token,
        course,
        json!({ "title": "TCP", "content": "Handshakes" }),
    )
    .await;
    let lesson_b = create_lesson(
        &app,
        &tutor.access_token,
        course,
        json!({ "title": "UDP", "content": "Datagrams" }),
    )
    .await;

    let learner = app.sign_up("learner@example.com", "Learner").await;
    let token = Some(learner.access_token.as_str());

    let not_enrolled = app
        .get(&format!("/api/learn/courses/{course}/progress/"), token)
        .await;
    assert_eq!(not_enrolled.status, StatusCode::NOT_FOUND);

    let early_complete = app
        .post(&format!("/api/learn/lessons/{lesson_a}/complete/"), token, json!({}))
        .await;
    assert_eq!(early_complete.status, StatusCode::NOT_FOUND);

    let enroll_uri = format!("/api/learn/courses/{course}/enroll/");

    let enrolled = app.post(&enroll_uri, token, json!({})).await;
    assert_eq!(enrolled.status, StatusCode::CREATED);
    assert_eq!(enrolled.json()["enrollment"]["course_id"], course);
    assert!(enrolled.json().get("created").is_none());

    let again = app.post(&enroll_uri, token, json!({})).await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.json()["message"], "Already enrolled");

    let progress = app
        .get(&format!("/api/learn/courses/{course}/progress/"), token)
        .await;
    assert_eq!(progress.status, StatusCode::OK);
    assert_eq!(progress.json()["total_lessons"], 2);
    assert_eq!(progress.json()["completion_percentage"], 0);

    let complete_uri = format!("/api/learn/lessons/{lesson_a}/complete/");
    let completed = app.post(&complete_uri, token, json!({})).await;
    assert_eq!(completed.status, StatusCode::OK);
    assert_eq!(completed.json()["lesson_id"], lesson_a);
    assert_eq!(completed.json()["progress"]["completion_percentage"], 50);

    let repeated = app.post(&complete_uri, token, json!({})).await;
    assert_eq!(repeated.status, StatusCode::OK);
    assert_eq!(
        repeated.json()["progress"]["completed_lessons"],
        json!([lesson_a])
    );

    let finished = app
        .post(&format!("/api/learn/lessons/{lesson_b}/complete/"), token, json!({}))
        .await;
    assert_eq!(finished.json()["progress"]["completion_percentage"], 100);

    let detail = app.get(&format!("/api/learn/courses/{course}/"), token).await;
    assert_eq!(detail.json()["course"]["is_enrolled"], true);
    assert_eq!(detail.json()["progress"]["completion_percentage"], 100);

    let enrollments = app.get("/api/learn/enrollments/", token).await;
    assert_eq!(enrollments.status, StatusCode::OK);
    assert_eq!(enrollments.json()["count"], 1);
    assert_eq!(enrollments.json()["results"][0]["course_title"], "Networking");

    let unknown_course = app
        .post("/api/learn/courses/9999/enroll/", token, json!({}))
        .await;
    assert_eq!(unknown_course.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lesson_validation() {
    let app = TestApp::new();
    let tutor = instructor(&app, "strict@example.com", "Strict").await;
    let course = create_course(&app, &tutor.access_token, "Validation").await;

    let response = app
        .post(
            &format!("/api/learn/courses/{course}/lessons/"),
            Some(&tutor.access_token),
            json!({ "title": "", "content": "Body", "videoUrl": "not a url" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_non_numeric_ids_use_error_envelope() {
    let app = TestApp::new();
    let viewer = app.sign_up("curious@example.com", "Curious").await;

    let response = app
        .get("/api/learn/courses/abc/", Some(&viewer.access_token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["status"], "error");
    assert_eq!(error_code(&response), "BAD_REQUEST");

    let role = app
        .send(
            Method::PUT,
            "/api/users/me/role/",
            Some(&viewer.access_token),
            Some(json!({ "role": "admin" })),
        )
        .await;
    assert_eq!(role.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&role), "BAD_REQUEST");
}
