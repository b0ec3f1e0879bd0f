use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A user profile document in the `profiles` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub last_updated: DateTime<Utc>,
    pub username: String,
    pub role: String,
    pub color: String,
}

impl Profile {
    pub fn new(username: String, role: String, color: String) -> Self {
        Self {
            id: None,
            last_updated: Utc::now(),
            username,
            role,
            color,
        }
    }
}
