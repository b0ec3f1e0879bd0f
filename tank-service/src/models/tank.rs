use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A tank document in the `tanks` collection.
///
/// The payload fields are nullable at the storage layer: a partial update
/// writes every field of the update model, so omitted fields end up as BSON
/// Null on the stored document. Creation always supplies all three.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

impl Tank {
    pub fn new(location: String, lat: f64, long: f64) -> Self {
        Self {
            id: None,
            location: Some(location),
            lat: Some(lat),
            long: Some(long),
        }
    }
}
