use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Tank;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTankRequest {
    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: String,
    pub lat: f64,
    pub long: f64,
}

/// Partial update for a tank. Every field is written into the `$set`
/// document whether or not the caller supplied it, so omitted fields
/// overwrite the stored value with null. This mirrors the upstream wire
/// contract; callers wanting to keep a field must resend it.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTankRequest {
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct TankResponse {
    pub id: String,
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

impl From<Tank> for TankResponse {
    fn from(tank: Tank) -> Self {
        Self {
            id: tank.id.map(|id| id.to_hex()).unwrap_or_default(),
            location: tank.location,
            lat: tank.lat,
            long: tank.long,
        }
    }
}

/// Top-level envelope for the tank listing.
#[derive(Debug, Serialize)]
pub struct TankCollection {
    pub tanks: Vec<TankResponse>,
}
