//! In-Memory Repository Implementation
//!
//! HashMap-backed account store. Used by the test suite and usable for
//! demos; the uniqueness check and insert happen under one write guard,
//! which gives `insert` the required atomicity.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::Username;
use crate::error::{AuthError, AuthResult};

/// In-memory account repository
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(username.as_str()).cloned())
    }

    async fn insert(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(account.username.as_str()) {
            return Err(AuthError::UsernameTaken);
        }

        accounts.insert(account.username.as_str().to_string(), account.clone());
        Ok(())
    }
}
