//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits, authorization policy
//! - `application/` - Use cases and application configuration
//! - `token/` - Signed credential token issuance and verification
//! - `infra/` - Repository implementations (PostgreSQL, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, middleware, routers
//!
//! ## Features
//! - Account registration with username + password + role
//! - Login issuing stateless, HMAC-SHA256 signed credential tokens
//! - Bearer-token authentication middleware
//! - Role-based access gating (User, Admin)
//! - Login throttling per client IP
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - Tokens are signature + expiry checked on every request; the server
//!   holds no session state and the store is never consulted for
//!   verification
//! - Token verification failures share one external 401 class

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;
pub mod token;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryAccountRepository;
pub use infra::postgres::PgAccountRepository;
pub use presentation::router::{auth_router, auth_router_generic, protected_router};
pub use token::{Claims, Identity, TokenIssuer, TokenVerifier};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryAccountRepository;
    pub use crate::infra::postgres::PgAccountRepository as AccountStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
