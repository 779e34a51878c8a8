//! Auth Middleware
//!
//! Per request: `NoToken -> TokenPresented -> {Verified, Rejected}`.
//!
//! `require_auth` turns a bearer token into a request-scoped [`Identity`];
//! `enforce_role` gates an already-authenticated request on role
//! membership. Neither touches the account store: authentication is
//! stateless re-verification on every request.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use platform::bearer::extract_bearer_token;
use platform::client::extract_client_ip;
use platform::rate_limit::{RateLimitConfig, RateLimitStore};

use crate::application::config::AuthConfig;
use crate::domain::authorize;
use crate::domain::value_object::Role;
use crate::error::AuthError;
use crate::token::Identity;

/// Middleware state for token verification
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a verified credential token
///
/// - No token presented → `Unauthenticated`
/// - Verifier failure → rejected with the specific error kind; the
///   response mapping collapses all of them into one 401 class
/// - Success → [`Identity`] attached to request extensions, pipeline
///   continues
pub async fn require_auth(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(token) = extract_bearer_token(req.headers()) else {
        return Err(AuthError::Unauthenticated.into_response());
    };

    let identity = state
        .config
        .verifier()
        .verify(&token)
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Middleware that gates an authenticated request on role membership
///
/// Reads the identity attached by [`require_auth`]; composing this layer
/// inside it is what enforces the authenticate-then-authorize ordering.
/// A missing identity means the composition is wrong and rejects with
/// `Unauthenticated` rather than trusting the request.
pub async fn enforce_role(
    req: Request<Body>,
    next: Next,
    allowed: &'static [Role],
) -> Result<Response, Response> {
    let Some(identity) = req.extensions().get::<Identity>() else {
        return Err(AuthError::Unauthenticated.into_response());
    };

    authorize::require(identity, allowed).map_err(|e| e.into_response())?;

    Ok(next.run(req).await)
}

// ============================================================================
// Login rate limiting
// ============================================================================

/// Middleware state for login throttling
#[derive(Clone)]
pub struct RateLimitState<S> {
    pub store: Arc<S>,
    pub config: RateLimitConfig,
}

/// Middleware that throttles requests per client IP
pub async fn rate_limit_login<S>(
    State(state): State<RateLimitState<S>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: RateLimitStore + Send + Sync + 'static,
{
    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());

    let key = extract_client_ip(req.headers(), direct_ip)
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let result = state
        .store
        .check_and_increment(&key, &state.config)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Rate limit check failed");
            AuthError::Internal("Rate limiter failure".to_string()).into_response()
        })?;

    if !result.allowed {
        return Err(AuthError::RateLimited.into_response());
    }

    Ok(next.run(req).await)
}
