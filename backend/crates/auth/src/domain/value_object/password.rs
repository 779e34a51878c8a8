//! Password Value Objects
//!
//! Domain wrappers around `platform::password` with auth-specific error
//! mapping. Policy violations surface as `ValidationFailure`; hashing
//! faults surface as `Hashing`.

use std::fmt;

use platform::password::{HashParams, PasswordDigest, PasswordHashError, PlaintextPassword};

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(PlaintextPassword);

impl RawPassword {
    /// Create a new raw password with policy validation
    pub fn new(raw: String) -> AuthResult<Self> {
        let plaintext = PlaintextPassword::new(raw)
            .map_err(|e| AuthError::ValidationFailure(e.to_string()))?;
        Ok(Self(plaintext))
    }

    /// Access the inner plaintext
    pub(crate) fn inner(&self) -> &PlaintextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password Hash (for storage)
// ============================================================================

/// Hashed password for account storage (Argon2id PHC string)
///
/// An account store entry never holds the plaintext; this is the only
/// password representation that leaves the registration/login paths.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(PasswordDigest);

impl PasswordHash {
    /// Create from raw password by hashing
    pub fn from_raw(
        raw: &RawPassword,
        params: &HashParams,
        pepper: Option<&[u8]>,
    ) -> AuthResult<Self> {
        let digest = raw
            .inner()
            .hash(params, pepper)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;
        Ok(Self(digest))
    }

    /// Create from PHC string (from storage)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        let digest = PasswordDigest::from_phc_string(phc_string).map_err(|e| match e {
            PasswordHashError::InvalidHashFormat => {
                AuthError::Hashing("Invalid password hash in storage".to_string())
            }
            other => AuthError::Hashing(other.to_string()),
        })?;
        Ok(Self(digest))
    }

    /// Get PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash (constant time)
    ///
    /// A mismatch returns `false`, never an error.
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
