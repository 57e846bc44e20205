use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{Profile, ProfileResponse, UpdateProfileRequest};
use crate::{
    auth::{dto::MessageResponse, extractors::AuthUser, repo_types::User},
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let Some(user) = User::find_by_email(&state.db, &email).await? else {
        return Err(ApiError::NotFound("User not found"));
    };

    Ok(Json(ProfileResponse {
        user: Profile {
            email: user.email,
            phone: user.phone,
            bio: user.bio,
        },
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    User::update_profile(
        &state.db,
        &email,
        payload.phone.as_deref(),
        payload.bio.as_deref(),
    )
    .await?;

    info!(%email, "profile updated");
    Ok(Json(MessageResponse {
        message: "Profile updated successfully",
    }))
}
