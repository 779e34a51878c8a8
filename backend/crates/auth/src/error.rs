//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// One variant per expected, caller-recoverable condition. All of them map
/// to a stable HTTP status; none of them crash the process.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request failed field validation (missing field, bad username,
    /// unknown role, weak password)
    #[error("Validation failed: {0}")]
    ValidationFailure(String),

    /// User name already exists
    #[error("User name already exists")]
    UsernameTaken,

    /// Account not found
    #[error("User not found")]
    UserNotFound,

    /// Invalid credentials (wrong password)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token could not be decoded (segments, base64, claims structure)
    #[error("Malformed credential token")]
    MalformedToken,

    /// Token signature does not match recomputation with the server secret
    #[error("Credential token signature mismatch")]
    InvalidSignature,

    /// Token expiry is in the past
    #[error("Credential token expired")]
    TokenExpired,

    /// No credential presented on a protected route
    #[error("Authentication required")]
    Unauthenticated,

    /// Authenticated identity lacks a required role
    #[error("Insufficient role")]
    Forbidden,

    /// Password hashing failed (entropy source or internal failure,
    /// malformed stored digest)
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Token TTL was not positive
    #[error("Token TTL must be positive")]
    InvalidTtl,

    /// Account store cannot be reached
    #[error("Account store unavailable")]
    StoreUnavailable,

    /// Too many requests from one client
    #[error("Too many requests")]
    RateLimited,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::ValidationFailure(_) => StatusCode::BAD_REQUEST,
            AuthError::UsernameTaken => StatusCode::CONFLICT,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::TokenExpired
            | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AuthError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Hashing(_)
            | AuthError::InvalidTtl
            | AuthError::Database(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::ValidationFailure(_) => ErrorKind::BadRequest,
            AuthError::UsernameTaken => ErrorKind::Conflict,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::TokenExpired
            | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::RateLimited => ErrorKind::TooManyRequests,
            AuthError::StoreUnavailable => ErrorKind::ServiceUnavailable,
            AuthError::Hashing(_)
            | AuthError::InvalidTtl
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError for the HTTP boundary
    ///
    /// The external 401 never reveals whether decoding, the signature, or
    /// the expiry check failed; the specific kind stays in logs only.
    ///
    /// `UserNotFound` and `InvalidCredentials` stay distinguishable here,
    /// matching the upstream service. A hardened deployment can merge both
    /// into the `InvalidCredentials` response to prevent username
    /// enumeration.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::TokenExpired
            | AuthError::Unauthenticated => AppError::unauthorized("Authentication required"),
            AuthError::Hashing(_)
            | AuthError::InvalidTtl
            | AuthError::Database(_)
            | AuthError::Internal(_) => AppError::internal("Internal server error"),
            AuthError::StoreUnavailable => {
                AppError::service_unavailable("Service temporarily unavailable")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Hashing(msg) => {
                tracing::error!(message = %msg, "Password hashing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidTtl => {
                tracing::error!("Token issued with non-positive TTL");
            }
            AuthError::StoreUnavailable => {
                tracing::error!("Account store unavailable");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::MalformedToken | AuthError::InvalidSignature | AuthError::TokenExpired => {
                tracing::warn!(error = %self, "Token verification failed");
            }
            AuthError::RateLimited => {
                tracing::warn!("Request rate limited");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
