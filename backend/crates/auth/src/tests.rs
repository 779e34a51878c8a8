//! End-to-end tests for the auth crate
//!
//! Drives the real routers over the in-memory repository with
//! `tower::ServiceExt::oneshot`: registration, login, token transport,
//! and role gating as a client would see them.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{TimeDelta, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;

use platform::password::HashParams;
use platform::rate_limit::RateLimitConfig;

use crate::application::config::AuthConfig;
use crate::domain::value_object::{Role, Username};
use crate::infra::memory::InMemoryAccountRepository;
use crate::presentation::router::{auth_router_generic, protected_router};

// ============================================================================
// Harness
// ============================================================================

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig {
        // Cheap hashing so the suite stays fast
        hash_params: HashParams {
            m_cost_kib: 64,
            t_cost: 1,
            p_cost: 1,
        },
        // Generous limit; throttling has its own dedicated test
        login_rate_limit: RateLimitConfig::new(1000, 60),
        ..AuthConfig::with_random_secret()
    })
}

fn test_app(config: Arc<AuthConfig>) -> Router {
    let repo = InMemoryAccountRepository::new();
    Router::new()
        .nest("/api/auth", auth_router_generic(repo, config.clone()))
        .nest("/api", protected_router(config))
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn get_with_token(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let response = app.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn register(app: &Router, username: &str, password: &str, role: &str) -> (StatusCode, Value) {
    post_json(
        app,
        "/api/auth/register",
        json!({ "username": username, "password": password, "role": role }),
    )
    .await
}

async fn login(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    post_json(
        app,
        "/api/auth/login",
        json!({ "username": username, "password": password }),
    )
    .await
}

async fn login_token(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = login(app, username, password).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn register_creates_account() {
    let app = test_app(test_config());

    let (status, body) = register(&app, "alice", "secret123", "user").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["subject"], "alice");
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn register_duplicate_username_is_conflict() {
    let app = test_app(test_config());

    let (first, _) = register(&app, "alice", "secret123", "user").await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, body) = register(&app, "alice", "other-pass99", "user").await;
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn register_missing_fields_rejected() {
    let app = test_app(test_config());

    let (status, _) = post_json(
        &app,
        "/api/auth/register",
        json!({ "password": "secret123" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        post_json(&app, "/api/auth/register", json!({ "username": "alice" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_role_defaults_to_user() {
    let app = test_app(test_config());

    let (status, body) = post_json(
        &app,
        "/api/auth/register",
        json!({ "username": "alice", "password": "secret123" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn register_unknown_role_rejected() {
    let app = test_app(test_config());

    let (status, _) = register(&app, "alice", "secret123", "superuser").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn login_returns_token_with_subject_and_role() {
    let config = test_config();
    let app = test_app(config.clone());
    register(&app, "alice", "secret123", "user").await;

    let (status, body) = login(&app, "alice", "secret123").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subject"], "alice");
    assert_eq!(body["role"], "user");

    // The returned token decodes to the same identity
    let identity = config
        .verifier()
        .verify(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(identity.subject, "alice");
    assert_eq!(identity.role, Role::User);
}

#[tokio::test]
async fn login_wrong_password_is_unauthorized() {
    let app = test_app(test_config());
    register(&app, "alice", "secret123", "user").await;

    let (status, _) = login(&app, "alice", "wrong-password").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_unknown_user_is_not_found() {
    let app = test_app(test_config());

    let (status, _) = login(&app, "nobody", "secret123").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn login_attempts_are_throttled() {
    let config = Arc::new(AuthConfig {
        login_rate_limit: RateLimitConfig::new(2, 60),
        ..test_config().as_ref().clone()
    });
    let app = test_app(config);
    register(&app, "alice", "secret123", "user").await;

    let (first, _) = login(&app, "alice", "wrong-password").await;
    let (second, _) = login(&app, "alice", "wrong-password").await;
    let (third, _) = login(&app, "alice", "wrong-password").await;

    assert_eq!(first, StatusCode::UNAUTHORIZED);
    assert_eq!(second, StatusCode::UNAUTHORIZED);
    assert_eq!(third, StatusCode::TOO_MANY_REQUESTS);
}

// ============================================================================
// Protected routes
// ============================================================================

#[tokio::test]
async fn profile_without_token_is_unauthorized() {
    let app = test_app(test_config());

    let (status, body) = get_with_token(&app, "/api/profile", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Authentication required");
}

#[tokio::test]
async fn profile_with_valid_token() {
    let app = test_app(test_config());
    register(&app, "alice", "secret123", "user").await;
    let token = login_token(&app, "alice", "secret123").await;

    let (status, body) = get_with_token(&app, "/api/profile", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subject"], "alice");
    assert_eq!(body["role"], "user");
    assert_eq!(body["message"], "Welcome alice");
}

#[tokio::test]
async fn profile_with_tampered_token_is_unauthorized() {
    let app = test_app(test_config());
    register(&app, "alice", "secret123", "user").await;
    let token = login_token(&app, "alice", "secret123").await;

    // Flip one character of the signature segment
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let (status, body) = get_with_token(&app, "/api/profile", Some(&tampered)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    // Indistinguishable from any other token failure
    assert_eq!(body["detail"], "Authentication required");
}

#[tokio::test]
async fn profile_with_expired_token_is_unauthorized() {
    let config = test_config();
    let app = test_app(config.clone());
    register(&app, "alice", "secret123", "user").await;

    // Issued two hours ago with a one hour TTL
    let expired = config
        .issuer()
        .issue_at(
            &Username::new("alice").unwrap(),
            Role::User,
            Duration::from_secs(3600),
            Utc::now() - TimeDelta::hours(2),
        )
        .unwrap();

    let (status, body) = get_with_token(&app, "/api/profile", Some(&expired)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    // Same external class as a tampered or missing token
    assert_eq!(body["detail"], "Authentication required");
}

#[tokio::test]
async fn profile_with_wrong_scheme_is_unauthorized() {
    let app = test_app(test_config());

    let request = Request::builder()
        .method("GET")
        .uri("/api/profile")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Role gating
// ============================================================================

#[tokio::test]
async fn admin_route_forbidden_for_user_role() {
    let app = test_app(test_config());
    register(&app, "alice", "secret123", "user").await;
    let token = login_token(&app, "alice", "secret123").await;

    let (status, body) = get_with_token(&app, "/api/admin", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], 403);
}

#[tokio::test]
async fn admin_route_allowed_for_admin_role() {
    let app = test_app(test_config());
    register(&app, "root-admin", "secret123", "admin").await;
    let token = login_token(&app, "root-admin", "secret123").await;

    let (status, body) = get_with_token(&app, "/api/admin", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome Admin! You have full access.");
}

#[tokio::test]
async fn admin_route_without_token_is_unauthorized_not_forbidden() {
    // Authentication is checked before the role gate
    let app = test_app(test_config());

    let (status, _) = get_with_token(&app, "/api/admin", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Error body shape
// ============================================================================

#[tokio::test]
async fn errors_render_problem_details() {
    let app = test_app(test_config());

    let (status, body) = login(&app, "nobody", "secret123").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["title"], "Not Found");
    assert!(body["detail"].is_string());
}
