use crate::error::AppError;
use crate::AppState;
use axum::{extract::State, Json};
use common::models::PublicConfig;

/// Return the public auth provider settings the frontend signs in with.

pub async fn config(State(state): State<AppState>) -> Result<Json<PublicConfig>, AppError> {
    match state.config {
        Some(config) => Ok(Json(config)),
        None => {
            log::warn!("config requested but the auth provider is not configured");
            Err(AppError::MissingConfig)
        }
    }
}
