//! Repository Traits
//!
//! Interface for account persistence. Implementations live in the
//! infrastructure layer; the core only consumes their outcomes.

use crate::domain::entity::Account;
use crate::domain::value_object::Username;
use crate::error::AuthResult;

/// Account repository trait
///
/// `insert` must be atomic with respect to the uniqueness check on the
/// username; the store guarantees this (unique index, or a single write
/// lock for the in-memory variant) and signals a duplicate with
/// `AuthError::UsernameTaken`.
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Find an account by its exact (case-sensitive) username
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Account>>;

    /// Insert a new account
    async fn insert(&self, account: &Account) -> AuthResult<()>;
}
