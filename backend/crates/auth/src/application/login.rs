//! Login Use Case
//!
//! Authenticates a user and issues a signed credential token. No session
//! state is created; the token is the only artifact.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{RawPassword, Role, Username};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed credential token
    pub token: String,
    pub subject: String,
    pub role: Role,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // An identifier that fails validation cannot name an account
        let username = Username::new(&input.username).map_err(|_| AuthError::UserNotFound)?;

        let account = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !account
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        let token =
            self.config
                .issuer()
                .issue(&account.username, account.role, self.config.token_ttl)?;

        tracing::info!(
            subject = %account.username,
            role = %account.role,
            "User logged in"
        );

        Ok(LoginOutput {
            token,
            subject: account.username.to_string(),
            role: account.role,
        })
    }
}
