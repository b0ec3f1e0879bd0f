use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::dtos::{CreateTankRequest, TankCollection, TankResponse, UpdateTankRequest};
use crate::models::Tank;
use crate::services::metrics::{record_error, record_request};
use crate::startup::AppState;
use service_core::error::AppError;

/// Parse a path identifier into an ObjectId, rejecting malformed input
/// before any store round-trip.
fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid tank id '{}': {}", id, e)))
}

#[tracing::instrument(skip(state))]
pub async fn list_tanks(State(state): State<AppState>) -> Result<Json<TankCollection>, AppError> {
    let tanks = state
        .db
        .list_tanks()
        .await
        .map_err(record_error("list_tanks"))?;

    record_request("list_tanks", "ok");
    Ok(Json(TankCollection {
        tanks: tanks.into_iter().map(TankResponse::from).collect(),
    }))
}

#[tracing::instrument(skip(state, request))]
pub async fn create_tank(
    State(state): State<AppState>,
    Json(request): Json<CreateTankRequest>,
) -> Result<(StatusCode, Json<TankResponse>), AppError> {
    request.validate().map_err(record_error("create_tank"))?;

    let tank = Tank::new(request.location, request.lat, request.long);
    let inserted_id = state
        .db
        .insert_tank(&tank)
        .await
        .map_err(record_error("create_tank"))?;

    let created = state
        .db
        .find_tank(inserted_id)
        .await
        .map_err(record_error("create_tank"))?
        .ok_or_else(|| {
            record_request("create_tank", "error");
            AppError::InternalError(anyhow::anyhow!(
                "Tank {} missing immediately after insert",
                inserted_id.to_hex()
            ))
        })?;

    tracing::info!(tank_id = %inserted_id.to_hex(), "Tank created");
    record_request("create_tank", "ok");
    Ok((StatusCode::CREATED, Json(TankResponse::from(created))))
}

#[tracing::instrument(skip(state, request))]
pub async fn update_tank(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTankRequest>,
) -> Result<Json<TankResponse>, AppError> {
    let tank_id = parse_object_id(&id).map_err(record_error("update_tank"))?;

    // The whole update model goes into $set, absent fields included, so a
    // partial body nulls out whatever it omits. Wire contract, not an
    // accident; see UpdateTankRequest.
    let fields = mongodb::bson::to_document(&request)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to encode update: {}", e)))
        .map_err(record_error("update_tank"))?;
    state
        .db
        .update_tank(tank_id, fields)
        .await
        .map_err(record_error("update_tank"))?;

    match state
        .db
        .find_tank(tank_id)
        .await
        .map_err(record_error("update_tank"))?
    {
        Some(tank) => {
            tracing::info!(tank_id = %tank_id.to_hex(), "Tank updated");
            record_request("update_tank", "ok");
            Ok(Json(TankResponse::from(tank)))
        }
        None => {
            record_request("update_tank", "not_found");
            Err(AppError::NotFound(anyhow::anyhow!("Tank not found")))
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_tank(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let tank_id = parse_object_id(&id).map_err(record_error("delete_tank"))?;

    match state
        .db
        .find_tank(tank_id)
        .await
        .map_err(record_error("delete_tank"))?
    {
        Some(_) => {
            state
                .db
                .delete_tank(tank_id)
                .await
                .map_err(record_error("delete_tank"))?;
            tracing::info!(tank_id = %tank_id.to_hex(), "Tank deleted");
            record_request("delete_tank", "ok");
            Ok(StatusCode::OK)
        }
        None => {
            record_request("delete_tank", "not_found");
            Err(AppError::NotFound(anyhow::anyhow!("Tank not found")))
        }
    }
}
