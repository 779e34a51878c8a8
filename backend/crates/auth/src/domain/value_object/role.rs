//! Role Value Object
//!
//! Closed set of account roles. A role outside this set is rejected at
//! registration time as a validation failure; nothing downstream ever
//! sees an unenumerated role.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum Role {
    #[default]
    User = 0,
    Admin = 1,
}

/// Error returned when parsing an unknown role
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    #[error("Unknown role: '{0}'")]
    UnknownCode(String),

    #[error("Unknown role id: {0}")]
    UnknownId(i16),
}

impl Role {
    /// All enumerated roles
    pub const ALL: &'static [Role] = &[Role::User, Role::Admin];

    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Parse a role from its stored numeric id
    pub fn from_id(id: i16) -> Result<Self, RoleError> {
        match id {
            0 => Ok(Role::User),
            1 => Ok(Role::Admin),
            _ => Err(RoleError::UnknownId(id)),
        }
    }

    /// Parse a role from its string code
    pub fn from_code(code: &str) -> Result<Self, RoleError> {
        match code {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(RoleError::UnknownCode(code.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_id() {
        assert_eq!(Role::from_id(0), Ok(Role::User));
        assert_eq!(Role::from_id(1), Ok(Role::Admin));
        assert_eq!(Role::from_id(7), Err(RoleError::UnknownId(7)));
    }

    #[test]
    fn test_role_from_code() {
        assert_eq!(Role::from_code("user"), Ok(Role::User));
        assert_eq!(Role::from_code("admin"), Ok(Role::Admin));
        assert!(matches!(
            Role::from_code("superuser"),
            Err(RoleError::UnknownCode(_))
        ));
        // Codes are exact; no case folding
        assert!(Role::from_code("Admin").is_err());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_role_checks() {
        assert!(!Role::User.is_admin());
        assert!(Role::Admin.is_admin());
    }

    #[test]
    fn test_all_roles_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_id(role.id()), Ok(*role));
            assert_eq!(Role::from_code(role.code()), Ok(*role));
        }
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");

        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);

        let unknown: Result<Role, _> = serde_json::from_str("\"root\"");
        assert!(unknown.is_err());
    }
}
