//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::AccountId;

use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{PasswordHash, Role, Username};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                username,
                password_hash,
                role,
                created_at,
                updated_at
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_store_error)?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn insert(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                username,
                password_hash,
                role,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.username.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.role.id())
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // The unique index on username is the atomic uniqueness check;
            // surface its violation as the Conflict outcome
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AuthError::UsernameTaken
            }
            _ => map_store_error(e),
        })?;

        Ok(())
    }
}

/// Map transport-level failures to `StoreUnavailable`; everything else
/// stays a database error
fn map_store_error(e: sqlx::Error) -> AuthError {
    match &e {
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => AuthError::StoreUnavailable,
        _ => AuthError::Database(e),
    }
}

// ============================================================================
// Row Mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    username: String,
    password_hash: String,
    role: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    /// Reconstruct the entity; a row that fails value-object validation
    /// means corrupted storage and maps to an internal error
    fn into_account(self) -> AuthResult<Account> {
        let username = Username::from_stored(&self.username)
            .map_err(|e| AuthError::Internal(format!("Corrupt username in storage: {e}")))?;
        let password_hash = PasswordHash::from_phc_string(self.password_hash)?;
        let role = Role::from_id(self.role)
            .map_err(|e| AuthError::Internal(format!("Corrupt role in storage: {e}")))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            username,
            password_hash,
            role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
