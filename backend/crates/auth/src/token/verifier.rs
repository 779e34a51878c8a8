//! Token Verifier
//!
//! Validates a presented token's structure, signature, and expiry, in that
//! order, and extracts the authenticated identity. Verification is a pure
//! function of (token, current time, server secret): no I/O, no state
//! mutation, safe to run fully in parallel across requests.

use std::time::Duration;

use chrono::{DateTime, Utc};
use platform::crypto;

use crate::error::{AuthError, AuthResult};

use super::claims::{Claims, Identity};

/// Verifies credential tokens against the process-wide secret
#[derive(Clone)]
pub struct TokenVerifier {
    secret: [u8; 32],
    /// Clock skew tolerance applied to the expiry check (default zero)
    skew: Duration,
}

impl TokenVerifier {
    pub fn new(secret: [u8; 32], skew: Duration) -> Self {
        Self { secret, skew }
    }

    /// Verify a token against the current wall clock
    pub fn verify(&self, token: &str) -> AuthResult<Identity> {
        self.verify_at(token, Utc::now())
    }

    /// Deterministic variant of [`verify`](Self::verify) with an explicit clock
    ///
    /// Failure modes, checked in order:
    /// 1. structural decode failure → `MalformedToken`
    /// 2. signature mismatch (constant time) → `InvalidSignature`
    /// 3. `now > exp + skew` → `TokenExpired`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<Identity> {
        let (payload, signature_b64) = token.split_once('.').ok_or(AuthError::MalformedToken)?;
        if payload.is_empty() || signature_b64.is_empty() || signature_b64.contains('.') {
            return Err(AuthError::MalformedToken);
        }

        let claims_json =
            crypto::from_base64url(payload).map_err(|_| AuthError::MalformedToken)?;
        let claims: Claims =
            serde_json::from_slice(&claims_json).map_err(|_| AuthError::MalformedToken)?;
        let signature =
            crypto::from_base64url(signature_b64).map_err(|_| AuthError::MalformedToken)?;

        if !crypto::hmac_verify(&self.secret, payload.as_bytes(), &signature) {
            return Err(AuthError::InvalidSignature);
        }

        if claims.is_expired(now, self.skew) {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims.into())
    }
}
