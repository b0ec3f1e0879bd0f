use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Profile;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "Role cannot be empty"))]
    pub role: String,
    #[validate(length(min = 1, message = "Color cannot be empty"))]
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub last_updated: DateTime<Utc>,
    pub username: String,
    pub role: String,
    pub color: String,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.map(|id| id.to_hex()).unwrap_or_default(),
            last_updated: profile.last_updated,
            username: profile.username,
            role: profile.role,
            color: profile.color,
        }
    }
}

/// Top-level envelope for the profile listing.
#[derive(Debug, Serialize)]
pub struct ProfileCollection {
    pub profile: Vec<ProfileResponse>,
}
