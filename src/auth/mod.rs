use crate::state::AppState;
use axum::Router;

pub mod claims;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;
mod repo;
pub mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
