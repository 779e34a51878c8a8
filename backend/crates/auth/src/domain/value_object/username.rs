//! Username Value Object
//!
//! The username is the public, unique identifier of an account and the
//! subject carried inside credential tokens.
//!
//! ## Invariants
//! - Non-empty after normalization
//! - At most [`USERNAME_MAX_LENGTH`] characters
//! - No whitespace or control characters
//! - Case-SENSITIVE: `Alice` and `alice` are two different identifiers.
//!   Uniqueness in the account store is enforced on the exact string.
//!
//! Input is NFKC-normalized and trimmed before validation so that visually
//! identical Unicode inputs map to one stored form.

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for a username (in characters)
pub const USERNAME_MAX_LENGTH: usize = 64;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when username validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// Username is empty after normalization
    Empty,

    /// Username is too long (maximum: USERNAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// Username contains whitespace
    ContainsWhitespace,

    /// Username contains a control character
    InvalidCharacter { char: char, position: usize },
}

impl fmt::Display for UsernameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Username cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Username is too long ({length} chars, maximum {max})")
            }
            Self::ContainsWhitespace => {
                write!(f, "Username cannot contain whitespace")
            }
            Self::InvalidCharacter { char, position } => {
                write!(f, "Invalid character '{char}' at position {position}")
            }
        }
    }
}

impl std::error::Error for UsernameError {}

// ============================================================================
// Username Value Object
// ============================================================================

/// Validated, normalized, case-preserving username
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a new Username from raw input
    ///
    /// Applies normalization (NFKC, trim) and validates. Case is preserved.
    pub fn new(input: impl AsRef<str>) -> Result<Self, UsernameError> {
        let normalized = Self::normalize(input.as_ref());
        Self::validate(&normalized)?;
        Ok(Self(normalized))
    }

    /// Create from stored values (assumes already validated at registration)
    pub fn from_stored(stored: &str) -> Result<Self, UsernameError> {
        Self::validate(stored)?;
        Ok(Self(stored.to_string()))
    }

    /// Get the username as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Normalize input string (NFKC, trim; case preserved)
    fn normalize(input: &str) -> String {
        input.nfkc().collect::<String>().trim().to_string()
    }

    /// Validate the normalized username
    fn validate(name: &str) -> Result<(), UsernameError> {
        if name.is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = name.chars().count();
        if length > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                length,
                max: USERNAME_MAX_LENGTH,
            });
        }

        if name.chars().any(|c| c.is_whitespace()) {
            return Err(UsernameError::ContainsWhitespace);
        }

        for (pos, ch) in name.chars().enumerate() {
            if ch.is_control() {
                return Err(UsernameError::InvalidCharacter {
                    char: ch,
                    position: pos,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Username").field(&self.0).finish()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Username {
    type Error = UsernameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

// ============================================================================
// Tests
// ============================================================================
