//! Credential Tokens
//!
//! Stateless, HMAC-SHA256 signed tokens carrying `{sub, role, iat, exp}`.
//! Issuance and verification are pure functions of the claims, the clock,
//! and the process-wide secret; both carry `_at` variants taking an
//! explicit clock for deterministic tests.

pub mod claims;
pub mod issuer;
pub mod verifier;

pub use claims::{Claims, Identity};
pub use issuer::TokenIssuer;
pub use verifier::TokenVerifier;
