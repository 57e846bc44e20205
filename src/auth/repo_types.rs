use sqlx::FromRow;

/// Account row. The password hash stays inside the server; responses are
/// built from dedicated DTOs, never from this type.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
}
