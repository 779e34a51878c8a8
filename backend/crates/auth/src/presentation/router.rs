//! Auth Routers
//!
//! Route assembly and middleware composition. The ordering guarantee of
//! the authorization gate lives here: `require_auth` is the outermost
//! layer of the protected router, so `enforce_role` only ever runs on a
//! request that already carries a verified identity.

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{Next, from_fn, from_fn_with_state},
    routing::{get, post},
};
use std::sync::Arc;

use platform::rate_limit::InMemoryRateLimitStore;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::Role;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{
    AuthMiddlewareState, RateLimitState, enforce_role, rate_limit_login, require_auth,
};

/// Roles allowed through the admin gate
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Create the auth router (register/login) with PostgreSQL repository
pub fn auth_router(repo: PgAccountRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let limiter = RateLimitState {
        store: Arc::new(InMemoryRateLimitStore::new()),
        config: config.login_rate_limit.clone(),
    };

    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route(
            "/login",
            post(handlers::login::<R>).route_layer(from_fn_with_state(
                limiter,
                rate_limit_login::<InMemoryRateLimitStore>,
            )),
        )
        .with_state(state)
}

/// Create the router for guarded resources
///
/// `/profile` requires authentication only; `/admin` requires
/// authentication plus the admin role.
pub fn protected_router(config: Arc<AuthConfig>) -> Router {
    let auth_state = AuthMiddlewareState { config };

    Router::new()
        .route("/profile", get(handlers::profile))
        .route(
            "/admin",
            get(handlers::admin_only).route_layer(from_fn(
                |req: Request<Body>, next: Next| enforce_role(req, next, ADMIN_ONLY),
            )),
        )
        .layer(from_fn_with_state(auth_state, require_auth))
}
