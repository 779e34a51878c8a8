//! Credential Token Claims
//!
//! The structured payload carried inside a signed credential token, and
//! the request-scoped identity derived from a verified token.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::Role;

/// Claim set of a credential token
///
/// Serialized as JSON and signed; the server holds no session record, so
/// these fields are the complete authentication state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account's username
    pub sub: String,
    /// Role at issuance time
    pub role: Role,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Whether the claim set has expired at `now`, given a skew tolerance
    ///
    /// A token is accepted only while its expiry is in the future:
    /// expired iff `now > exp + skew`.
    pub fn is_expired(&self, now: DateTime<Utc>, skew: Duration) -> bool {
        now.timestamp() > self.exp + skew.as_secs() as i64
    }
}

/// Authenticated identity, derived from a verified token
///
/// Request-scoped: attached to the in-flight request after verification
/// and dropped with it. Holds no credential material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Account username
    pub subject: String,
    /// Role from the verified claims
    pub role: Role,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            role: claims.role,
        }
    }
}
