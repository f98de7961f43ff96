use mongodb::{Collection, Database};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub type DaoResult<T> = Result<T, DaoError>;

#[derive(Debug, Error)]
pub enum DaoError {
    #[error("Resource not found")]
    NotFound,
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

/// Typed wrapper around a MongoDB collection with the access patterns the
/// DAOs share. Documents in this store use signaling-layer string ids.
pub struct BaseDao<T: Send + Sync> {
    collection: Collection<T>,
}

impl<T> BaseDao<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection::<T>(collection),
        }
    }

    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    pub async fn insert_one(&self, doc: &T) -> DaoResult<()> {
        self.collection.insert_one(doc).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> DaoResult<T> {
        self.collection
            .find_one(bson::doc! { "_id": id })
            .await?
            .ok_or(DaoError::NotFound)
    }

    pub async fn update_one(
        &self,
        filter: bson::Document,
        update: bson::Document,
    ) -> DaoResult<bool> {
        let result = self.collection.update_one(filter, update).await?;
        Ok(result.modified_count > 0)
    }
}
