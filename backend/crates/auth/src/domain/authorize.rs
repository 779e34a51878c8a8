//! Authorization Gate
//!
//! Pure role membership check:
//! - No IO
//! - No panics
//! - No business logic (pure policy check)
//!
//! The gate trusts the identity it is given. It must only run after a
//! successful authentication step; that ordering is enforced where the
//! request pipeline is composed (see `presentation::router`), not here.

use crate::error::AuthError;
use crate::token::Identity;

use super::value_object::Role;

/// Allow the identity through iff its role is in `allowed`
///
/// An empty allow-list denies everything.
pub fn require(identity: &Identity, allowed: &[Role]) -> Result<(), AuthError> {
    if allowed.contains(&identity.role) {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}
