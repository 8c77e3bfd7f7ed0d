use sqlx::PgPool;

use crate::models::User;
use crate::store::StoreError;

/// Credential store adapter: principal records keyed by unique
/// username and email. Consumed by signup/login and get-me only.
pub struct UserStore<'a> {
    pool: &'a PgPool,
}

impl<'a> UserStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up a principal by username OR email with a single identity
    /// value, as presented at login.
    pub async fn find_one(&self, identity: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE username = $1 OR email = $1",
        )
        .bind(identity)
        .fetch_optional(self.pool)
        .await?;
        Ok(user)
    }

    /// Signup duplicate check: does any record claim this username or
    /// this email?
    pub async fn find_existing(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE username = $1 OR email = $2",
        )
        .bind(username)
        .bind(email)
        .fetch_optional(self.pool)
        .await?;
        Ok(user)
    }

    pub async fn insert_one(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, email, password_hash, created_at) \
             VALUES (gen_random_uuid(), $1, $2, $3, now()) \
             RETURNING *",
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await?;
        Ok(user)
    }
}
