use sqlx::PgPool;

use crate::auth::repo_types::User;

impl User {
    /// Overwrite both mutable profile columns in one statement.
    pub async fn update_profile(
        db: &PgPool,
        email: &str,
        phone: Option<&str>,
        bio: Option<&str>,
    ) -> anyhow::Result<()> {
        sqlx::query(r#"UPDATE users SET phone = $1, bio = $2 WHERE email = $3"#)
            .bind(phone)
            .bind(bio)
            .bind(email)
            .execute(db)
            .await?;
        Ok(())
    }
}
