use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Loads configuration from the environment. The signing secret is
    /// required, must be non-empty, and is read exactly once at startup.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is required")?;
        let secret = std::env::var("JWT_SECRET").context("JWT_SECRET is required")?;
        anyhow::ensure!(!secret.trim().is_empty(), "JWT_SECRET must not be empty");
        let ttl_minutes = parse_ttl_minutes(std::env::var("JWT_TTL_MINUTES").ok())?;
        Ok(Self {
            database_url,
            jwt: JwtConfig { secret, ttl_minutes },
        })
    }
}

/// Token lifetime in minutes; defaults to one hour. Zero or negative
/// values are rejected rather than wrapping into a huge unsigned TTL.
fn parse_ttl_minutes(raw: Option<String>) -> anyhow::Result<i64> {
    let Some(raw) = raw else {
        return Ok(60);
    };
    let minutes = raw
        .parse::<i64>()
        .with_context(|| format!("JWT_TTL_MINUTES must be an integer, got {raw:?}"))?;
    anyhow::ensure!(
        minutes > 0,
        "JWT_TTL_MINUTES must be positive, got {minutes}"
    );
    Ok(minutes)
}
