use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::dtos::{CreateProfileRequest, ProfileCollection, ProfileResponse};
use crate::models::Profile;
use crate::services::metrics::{record_error, record_request};
use crate::startup::AppState;
use service_core::error::AppError;

#[tracing::instrument(skip(state))]
pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<ProfileCollection>, AppError> {
    let profiles = state
        .db
        .list_profiles()
        .await
        .map_err(record_error("list_profiles"))?;

    record_request("list_profiles", "ok");
    Ok(Json(ProfileCollection {
        profile: profiles.into_iter().map(ProfileResponse::from).collect(),
    }))
}

#[tracing::instrument(skip(state, request))]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), AppError> {
    request.validate().map_err(record_error("create_profile"))?;

    let profile = Profile::new(request.username, request.role, request.color);
    let inserted_id = state
        .db
        .insert_profile(&profile)
        .await
        .map_err(record_error("create_profile"))?;

    // Return the persisted document rather than the request echo.
    let created = state
        .db
        .find_profile(inserted_id)
        .await
        .map_err(record_error("create_profile"))?
        .ok_or_else(|| {
            record_request("create_profile", "error");
            AppError::InternalError(anyhow::anyhow!(
                "Profile {} missing immediately after insert",
                inserted_id.to_hex()
            ))
        })?;

    tracing::info!(profile_id = %inserted_id.to_hex(), "Profile created");
    record_request("create_profile", "ok");
    Ok((StatusCode::CREATED, Json(ProfileResponse::from(created))))
}
