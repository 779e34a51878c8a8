//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AdminResponse, LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, RegisterResponse,
};
use crate::token::Identity;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

fn required(field: Option<String>, name: &str) -> AuthResult<String> {
    field.ok_or_else(|| AuthError::ValidationFailure(format!("{name} is required")))
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        username: required(req.username, "username")?,
        password: required(req.password, "password")?,
        role: req.role.unwrap_or_else(|| "user".to_string()),
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            subject: output.subject,
            role: output.role.code().to_string(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        username: required(req.username, "username")?,
        password: required(req.password, "password")?,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        subject: output.subject,
        role: output.role.code().to_string(),
    }))
}

// ============================================================================
// Protected resources
// ============================================================================

/// GET /api/profile (authentication required)
pub async fn profile(Extension(identity): Extension<Identity>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        message: format!("Welcome {}", identity.subject),
        subject: identity.subject,
        role: identity.role.code().to_string(),
    })
}

/// GET /api/admin (admin role required)
pub async fn admin_only(Extension(identity): Extension<Identity>) -> Json<AdminResponse> {
    tracing::debug!(subject = %identity.subject, "Admin resource accessed");

    Json(AdminResponse {
        message: "Welcome Admin! You have full access.".to_string(),
    })
}
