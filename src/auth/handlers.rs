use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, ResetPasswordRequest},
    extractors::AuthUser,
    jwt::JwtKeys,
    password::{hash_password, verify_password},
    repo_types::User,
};
use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/reset-password", put(reset_password))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        warn!("register missing email or password");
        return Err(ApiError::InvalidInput("Email and password are required"));
    };

    let hash = hash_password(&password)?;
    let user = User::create(&state.db, &email, &hash).await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully",
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // Absent fields behave like empty strings and fall through to the
    // same failure as a wrong password.
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let Some(user) = User::find_by_email(&state.db, &email).await? else {
        warn!(%email, "login with unknown email");
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(&password, &user.password_hash)? {
        warn!(user_id = user.id, "login with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user.email)?;

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
    }))
}

#[instrument(skip(state, payload))]
pub async fn reset_password(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let old_password = payload.old_password.unwrap_or_default();
    let new_password = payload.new_password.unwrap_or_default();

    // Accounts are never deleted, so a verified token should always
    // resolve to a row; handle the miss anyway.
    let Some(user) = User::find_by_email(&state.db, &email).await? else {
        return Err(ApiError::NotFound("User not found"));
    };

    if !verify_password(&old_password, &user.password_hash)? {
        warn!(user_id = user.id, "password reset with wrong old password");
        return Err(ApiError::IncorrectOldPassword);
    }

    let hash = hash_password(&new_password)?;
    User::update_password(&state.db, &email, &hash).await?;

    info!(user_id = user.id, "password reset");
    Ok(Json(MessageResponse {
        message: "Password reset successfully",
    }))
}
