mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::{ACCESS_TOKEN_LIFETIME, TestApp, error_code};
use serde_json::json;
use shared::{abstract_trait::jwt::JwtServiceTrait, model::role::Role};
use tower::ServiceExt;

#[tokio::test]
async fn test_register_twice_with_same_email() {
    let app = TestApp::new();

    let first = app.register("alice@example.com", "Alice", "secret123").await;
    assert_eq!(first.status, StatusCode::CREATED);

    let body = first.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["displayName"], "Alice");
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"].get("password").is_none());

    let second = app.register("alice@example.com", "Alice Again", "secret123").await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&second), "BAD_REQUEST");
    assert_eq!(second.json()["status"], "error");
}

#[tokio::test]
async fn test_register_normalizes_email_case() {
    let app = TestApp::new();

    let first = app.register("Bob@Example.com", "Bob", "secret123").await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.json()["user"]["email"], "bob@example.com");

    let second = app.register("bob@example.com", "Bobby", "secret123").await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_malformed_input() {
    let app = TestApp::new();

    let response = app.register("not-an-email", "A", "123").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response), "VALIDATION_ERROR");

    let message = response.json()["message"].as_str().unwrap().to_string();
    assert!(message.contains("email"));
    assert!(message.contains("password"));
}

#[tokio::test]
async fn test_register_rejects_malformed_json() {
    let app = TestApp::new();

    let response = app
        .post("/api/auth/register/", None, json!({ "email": "x@example.com" }))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_returns_tokens_with_configured_lifetime() {
    let app = TestApp::new();
    app.register("carol@example.com", "Carol", "secret123").await;

    let response = app.login("carol@example.com", "secret123").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["expires_in"], ACCESS_TOKEN_LIFETIME);
    assert_eq!(body["user"]["email"], "carol@example.com");

    let access = body["access_token"].as_str().unwrap();
    let claims = app.jwt.verify_token(access).unwrap();
    assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_LIFETIME);
    assert!(claims.exp > chrono::Utc::now().timestamp());

    let refresh = body["refresh_token"].as_str().unwrap();
    let refresh_claims = app.jwt.verify_token(refresh).unwrap();
    assert_eq!(refresh_claims.user_id, claims.user_id);
}

#[tokio::test]
async fn test_login_records_client_ip() {
    let app = TestApp::new();
    let session = app.sign_up("dave@example.com", "Dave").await;

    let user = app.db.user(session.user_id).await.unwrap();
    assert!(user.last_login.is_some());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login/")
        .header("content-type", "application/json")
        .header("x-forwarded-for", "203.0.113.9")
        .body(Body::from(
            json!({ "email": "dave@example.com", "password": "secret123" }).to_string(),
        ))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let user = app.db.user(session.user_id).await.unwrap();
    assert_eq!(user.last_login_ip.as_deref(), Some("203.0.113.9"));
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = TestApp::new();
    app.register("erin@example.com", "Erin", "secret123").await;

    let wrong_password = app.login("erin@example.com", "wrong-password").await;
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&wrong_password), "INVALID_CREDENTIALS");

    let unknown = app.login("nobody@example.com", "secret123").await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&unknown), "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_refresh_logout_scenario() {
    let app = TestApp::new();
    let session = app.sign_up("alice@example.com", "Alice").await;

    let refreshed = app.refresh(&session.refresh_token).await;
    assert_eq!(refreshed.status, StatusCode::OK);

    let body = refreshed.json();
    let a2 = body["access_token"].as_str().unwrap();
    assert_ne!(a2, session.access_token);
    assert_eq!(body["expires_in"], session.expires_in);
    assert!(body.get("refresh_token").is_none());

    let logout = app.post("/api/auth/logout/", Some(a2), json!({})).await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.json()["revoked_sessions"], 1);

    let after_logout = app.refresh(&session.refresh_token).await;
    assert_eq!(after_logout.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&after_logout), "INVALID_TOKEN");
    assert!(after_logout.json().get("access_token").is_none());
}

#[tokio::test]
async fn test_refresh_token_is_reusable_until_revoked() {
    let app = TestApp::new();
    let session = app.sign_up("frank@example.com", "Frank").await;

    for _ in 0..3 {
        let refreshed = app.refresh(&session.refresh_token).await;
        assert_eq!(refreshed.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_logout_revokes_every_session() {
    let app = TestApp::new();
    let first = app.sign_up("grace@example.com", "Grace").await;
    let second = app.sign_in("grace@example.com").await;

    let logout = app
        .send(Method::POST, "/api/auth/logout/", Some(&second.access_token), None)
        .await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.json()["revoked_sessions"], 2);

    assert_eq!(
        app.refresh(&first.refresh_token).await.status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        app.refresh(&second.refresh_token).await.status,
        StatusCode::UNAUTHORIZED
    );
    assert!(app.db.refresh_tokens().await.iter().all(|t| t.revoked));
}

#[tokio::test]
async fn test_expired_refresh_token_is_rejected() {
    let app = TestApp::new();
    let session = app.sign_up("heidi@example.com", "Heidi").await;

    let expired = app.jwt.generate_token(session.user_id, -60).unwrap();

    let response = app.refresh(&expired.token).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&response), "TOKEN_EXPIRED");
    assert!(response.json().get("access_token").is_none());
}

#[tokio::test]
async fn test_refresh_rejects_tokens_missing_from_ledger() {
    let app = TestApp::new();
    let session = app.sign_up("ivan@example.com", "Ivan").await;

    let garbage = app.refresh("not-a-jwt").await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&garbage), "INVALID_TOKEN");

    let access_as_refresh = app.refresh(&session.access_token).await;
    assert_eq!(access_as_refresh.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&access_as_refresh), "INVALID_TOKEN");
}

#[tokio::test]
async fn test_me_requires_bearer_token() {
    let app = TestApp::new();

    let missing = app.get("/api/auth/me/", None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&missing), "AUTH_REQUIRED");

    let forged = app.get("/api/auth/me/", Some("forged.token.value")).await;
    assert_eq!(forged.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&forged), "INVALID_TOKEN");
}

#[tokio::test]
async fn test_token_for_missing_user_is_unauthenticated() {
    let app = TestApp::new();
    let orphan = app.jwt.generate_token(4242, 60).unwrap();

    let me = app.get("/api/auth/me/", Some(&orphan.token)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&me), "AUTH_REQUIRED");

    let refresh = app.refresh(&orphan.token).await;
    assert_eq!(refresh.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&refresh), "AUTH_REQUIRED");
    assert!(refresh.json().get("access_token").is_none());
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let app = TestApp::new();
    let session = app.sign_up("judy@example.com", "Judy").await;

    let response = app.get("/api/auth/me/", Some(&session.access_token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["id"], session.user_id);
    assert_eq!(body["email"], "judy@example.com");
    assert_eq!(body["emailVerified"], false);
}

#[tokio::test]
async fn test_expired_access_token_is_rejected() {
    let app = TestApp::new();
    let session = app.sign_up("ken@example.com", "Ken").await;

    let expired = app.jwt.generate_token(session.user_id, -1).unwrap();

    let response = app.get("/api/auth/me/", Some(&expired.token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&response), "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_inactive_user_is_locked_out() {
    let app = TestApp::new();
    let session = app.sign_up("leo@example.com", "Leo").await;

    app.db.set_active(session.user_id, false).await;

    let me = app.get("/api/auth/me/", Some(&session.access_token)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&me), "AUTH_REQUIRED");

    let login = app.login("leo@example.com", "secret123").await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&login), "INVALID_CREDENTIALS");

    let refresh = app.refresh(&session.refresh_token).await;
    assert_eq!(refresh.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new();
    let session = app.sign_up("mallory@example.com", "Mallory").await;

    let response = app
        .send(
            Method::PATCH,
            "/api/auth/me/",
            Some(&session.access_token),
            Some(json!({ "displayName": "Mallory Smith" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["displayName"], "Mallory Smith");

    let me = app.get("/api/auth/me/", Some(&session.access_token)).await;
    assert_eq!(me.json()["displayName"], "Mallory Smith");
}

#[tokio::test]
async fn test_role_update_is_admin_only() {
    let app = TestApp::new();
    let admin = app.sign_up("root@example.com", "Root").await;
    let member = app.sign_up("niaj@example.com", "Niaj").await;

    let uri = format!("/api/users/{}/role/", member.user_id);
    let body = json!({ "role": "instructor" });

    let forbidden = app
        .send(Method::PUT, &uri, Some(&member.access_token), Some(body.clone()))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(error_code(&forbidden), "FORBIDDEN");

    app.promote(admin.user_id, Role::Admin).await;

    let updated = app
        .send(Method::PUT, &uri, Some(&admin.access_token), Some(body.clone()))
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json()["role"], "instructor");

    let missing = app
        .send(
            Method::PUT,
            "/api/users/9999/role/",
            Some(&admin.access_token),
            Some(body),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&missing), "NOT_FOUND");
}

#[tokio::test]
async fn test_health_and_metrics() {
    let app = TestApp::new();

    let health = app.get("/api/health/", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.json()["status"], "success");

    app.register("olivia@example.com", "Olivia", "secret123").await;
    app.login("olivia@example.com", "wrong-password").await;

    let metrics = app.get("/metrics", None).await;
    assert_eq!(metrics.status, StatusCode::OK);
    assert!(
        metrics
            .content_type
            .as_deref()
            .unwrap_or_default()
            .starts_with("application/openmetrics-text")
    );
    assert!(metrics.text.contains("service_requests_total"));
    assert!(metrics.text.contains("operation=\"login\""));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = TestApp::new();

    let response = app.get("/api-docs/openapi.json", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert!(body["paths"].get("/api/auth/login/").is_some());
    assert!(body["paths"].get("/api/learn/courses/").is_some());
    assert!(body["components"]["securitySchemes"].get("bearer_auth").is_some());
}
