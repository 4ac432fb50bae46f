//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_id::UserId, user_password::UserPassword,
};
use crate::error::{AccountsError, AccountsResult};

/// PostgreSQL-backed accounts repository
#[derive(Clone)]
pub struct PgAccountsRepository {
    pool: PgPool,
}

impl PgAccountsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgAccountsRepository {
    async fn create(&self, user: &User) -> AccountsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                name,
                email,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.password.as_phc_string())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // Two registrations racing past the existence check still hit
            // the unique index; surface the loser as a conflict, not a 500
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                AccountsError::EmailTaken
            }
            _ => AccountsError::from(e),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AccountsResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AccountsResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AccountsResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AccountsResult<User> {
        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            name: DisplayName::from_db(self.name),
            email: Email::from_db(self.email),
            password: UserPassword::from_phc_string(self.password_hash)?,
            created_at: self.created_at,
        })
    }
}
