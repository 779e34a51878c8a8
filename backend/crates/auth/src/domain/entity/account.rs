//! Account Entity
//!
//! One registered principal. The username is the immutable public
//! identifier; the password hash is the only stored credential material.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::value_object::{PasswordHash, Role, Username};

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Unique, case-sensitive username (token subject)
    pub username: Username,
    /// Salted Argon2id digest, never the plaintext
    pub password_hash: PasswordHash,
    /// Role from the closed enumerated set
    pub role: Role,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    pub fn new(username: Username, password_hash: PasswordHash, role: Role) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            username,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}
