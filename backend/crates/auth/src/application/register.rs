//! Register Use Case
//!
//! Creates a new account: validate fields, hash the password, insert.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{PasswordHash, RawPassword, Role, Username};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    /// Role code ("user" or "admin"); anything outside the enumerated
    /// set is a validation failure
    pub role: String,
}

/// Register output
pub struct RegisterOutput {
    pub subject: String,
    pub role: Role,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let username = Username::new(&input.username)
            .map_err(|e| AuthError::ValidationFailure(e.to_string()))?;

        let role =
            Role::from_code(&input.role).map_err(|e| AuthError::ValidationFailure(e.to_string()))?;

        // Validate and hash the password; the plaintext never leaves here
        let raw_password = RawPassword::new(input.password)?;
        let password_hash =
            PasswordHash::from_raw(&raw_password, &self.config.hash_params, self.config.pepper())?;

        let account = Account::new(username, password_hash, role);

        // The store enforces identifier uniqueness atomically and
        // surfaces a duplicate as UsernameTaken
        self.repo.insert(&account).await?;

        tracing::info!(
            subject = %account.username,
            role = %account.role,
            "Account registered"
        );

        Ok(RegisterOutput {
            subject: account.username.to_string(),
            role,
        })
    }
}
