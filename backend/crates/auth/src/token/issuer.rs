//! Token Issuer
//!
//! Creates signed, time-bounded credential tokens. A token is two
//! URL-safe base64 segments joined by a dot:
//!
//! ```text
//! base64url(claims JSON) "." base64url(HMAC-SHA256(secret, encoded claims))
//! ```
//!
//! The signature is computed over the encoded payload bytes, so the signed
//! form is canonical by construction; no JSON canonicalization is needed.

use std::time::Duration;

use chrono::{DateTime, Utc};
use platform::crypto;

use crate::domain::value_object::{Role, Username};
use crate::error::{AuthError, AuthResult};

use super::claims::Claims;

/// Issues signed credential tokens with the process-wide secret
///
/// The secret is read-only after construction and shared by all requests.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: [u8; 32],
}

impl TokenIssuer {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Issue a token for `subject` with `role`, valid for `ttl` from now
    ///
    /// `ttl` must be positive; a zero duration fails with `InvalidTtl`.
    pub fn issue(&self, subject: &Username, role: Role, ttl: Duration) -> AuthResult<String> {
        self.issue_at(subject, role, ttl, Utc::now())
    }

    /// Deterministic variant of [`issue`](Self::issue) with an explicit clock
    pub fn issue_at(
        &self,
        subject: &Username,
        role: Role,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> AuthResult<String> {
        if ttl.is_zero() {
            return Err(AuthError::InvalidTtl);
        }

        let issued_at = now.timestamp();
        let claims = Claims {
            sub: subject.as_str().to_string(),
            role,
            iat: issued_at,
            exp: issued_at + ttl.as_secs() as i64,
        };

        let claims_json = serde_json::to_vec(&claims)
            .map_err(|e| AuthError::Internal(format!("Failed to encode claims: {e}")))?;
        let payload = crypto::to_base64url(&claims_json);

        let signature = crypto::hmac_sha256(&self.secret, payload.as_bytes());

        Ok(format!("{payload}.{}", crypto::to_base64url(&signature)))
    }
}
