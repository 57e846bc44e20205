use sqlx::PgPool;

use super::repo_types::User;
use crate::error::ApiError;

impl User {
    /// Find an account by its exact email. No case folding or trimming;
    /// the stored value is the external identifier.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, phone, bio
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create an account with a single uniqueness-constrained insert.
    /// Two concurrent registrations for the same email resolve at the
    /// constraint: one row, one `AlreadyExists`.
    pub async fn create(db: &PgPool, email: &str, password_hash: &str) -> Result<User, ApiError> {
        let res = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, $2)
            RETURNING id, email, password, phone, bio
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await;

        match res {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(ApiError::AlreadyExists)
            }
            Err(e) => Err(ApiError::from(anyhow::Error::new(e))),
        }
    }

    /// Replace the stored password hash. Callers verify the old password
    /// before reaching this point.
    pub async fn update_password(db: &PgPool, email: &str, password_hash: &str) -> anyhow::Result<()> {
        sqlx::query(r#"UPDATE users SET password = $1 WHERE email = $2"#)
            .bind(password_hash)
            .bind(email)
            .execute(db)
            .await?;
        Ok(())
    }
}
