use crate::models::{Profile, Tank};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::FindOptions,
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

/// Hard cap on how many documents a listing returns.
const LIST_LIMIT: i64 = 999;

/// Query options shared by every listing: no filter, no sort, capped.
fn list_options() -> FindOptions {
    FindOptions::builder().limit(LIST_LIMIT).build()
}

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn profiles(&self) -> Collection<Profile> {
        self.db.collection("profiles")
    }

    pub fn tanks(&self) -> Collection<Tank> {
        self.db.collection("tanks")
    }

    pub async fn list_profiles(&self) -> Result<Vec<Profile>, AppError> {
        let cursor = self.profiles().find(doc! {}, list_options()).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn insert_profile(&self, profile: &Profile) -> Result<ObjectId, AppError> {
        let result = self.profiles().insert_one(profile, None).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("Inserted profile id was not an ObjectId")))
    }

    pub async fn find_profile(&self, id: ObjectId) -> Result<Option<Profile>, AppError> {
        Ok(self.profiles().find_one(doc! { "_id": id }, None).await?)
    }

    pub async fn list_tanks(&self) -> Result<Vec<Tank>, AppError> {
        let cursor = self.tanks().find(doc! {}, list_options()).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn insert_tank(&self, tank: &Tank) -> Result<ObjectId, AppError> {
        let result = self.tanks().insert_one(tank, None).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("Inserted tank id was not an ObjectId")))
    }

    pub async fn find_tank(&self, id: ObjectId) -> Result<Option<Tank>, AppError> {
        Ok(self.tanks().find_one(doc! { "_id": id }, None).await?)
    }

    /// Apply `fields` as a `$set` on the tank with the given id.
    ///
    /// Matching zero documents is not an error here; callers decide whether
    /// a missing tank is a 404 by re-reading afterwards.
    pub async fn update_tank(&self, id: ObjectId, fields: Document) -> Result<(), AppError> {
        self.tanks()
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await?;
        Ok(())
    }

    pub async fn delete_tank(&self, id: ObjectId) -> Result<(), AppError> {
        self.tanks().delete_one(doc! { "_id": id }, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listings_are_capped_at_999_documents() {
        let options = list_options();
        assert_eq!(options.limit, Some(999));
        assert!(options.sort.is_none());
    }
}
