#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use jsonwebtoken::Algorithm;
use serde_json::{Value, json};
use server::{handler::AppRouter, state::AppState};
use shared::{
    abstract_trait::user::repository::command::UserCommandRepositoryTrait,
    config::{Hashing, JwtConfig, JwtSettings},
    model::role::Role,
    testing::InMemoryDb,
};
use std::sync::Arc;
use tower::ServiceExt;

pub const ACCESS_TOKEN_LIFETIME: i64 = 900;
pub const REFRESH_TOKEN_LIFETIME: i64 = 3600;

pub struct TestApp {
    pub router: Router,
    pub db: Arc<InMemoryDb>,
    pub jwt: JwtConfig,
}

pub struct Response {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub text: String,
}

impl Response {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or(Value::Null)
    }
}

pub struct Session {
    pub user_id: i32,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

impl TestApp {
    pub fn new() -> Self {
        let settings = JwtSettings::new(
            "integration-test-secret",
            Algorithm::HS256,
            ACCESS_TOKEN_LIFETIME,
            REFRESH_TOKEN_LIFETIME,
        )
        .unwrap();

        let db = InMemoryDb::new();
        let state = AppState::with_repositories(
            db.repositories(),
            &settings,
            Arc::new(Hashing::with_cost(4)),
        );

        Self {
            router: AppRouter::build(state),
            db,
            jwt: JwtConfig::new(&settings),
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        Response {
            status,
            content_type,
            text: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> Response {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn register(&self, email: &str, display_name: &str, password: &str) -> Response {
        self.post(
            "/api/auth/register/",
            None,
            json!({ "email": email, "displayName": display_name, "password": password }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.post(
            "/api/auth/login/",
            None,
            json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Response {
        self.post(
            "/api/auth/refresh/",
            None,
            json!({ "refresh_token": refresh_token }),
        )
        .await
    }

    /// Registers and logs in, panicking on anything but success.
    pub async fn sign_up(&self, email: &str, display_name: &str) -> Session {
        let registered = self.register(email, display_name, "secret123").await;
        assert_eq!(registered.status, StatusCode::CREATED, "{}", registered.text);

        self.sign_in(email).await
    }

    pub async fn sign_in(&self, email: &str) -> Session {
        let login = self.login(email, "secret123").await;
        assert_eq!(login.status, StatusCode::OK, "{}", login.text);

        let body = login.json();
        Session {
            user_id: body["user"]["id"].as_i64().unwrap() as i32,
            access_token: body["access_token"].as_str().unwrap().to_string(),
            refresh_token: body["refresh_token"].as_str().unwrap().to_string(),
            expires_in: body["expires_in"].as_i64().unwrap(),
        }
    }

    pub async fn promote(&self, user_id: i32, role: Role) {
        self.db.update_role(user_id, role).await.unwrap();
    }
}

pub fn error_code(response: &Response) -> String {
    response.json()["code"].as_str().unwrap_or_default().to_string()
}
