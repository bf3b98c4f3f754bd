//! Generic repository over UUID-keyed MongoDB documents
//!
//! Domain crates describe their record shape once (via [`UuidDocument`]) and
//! reuse the same collection mechanics instead of duplicating driver calls
//! per resource.

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    Collection, Database,
};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::common::DatabaseResult;

/// A document persisted in its own MongoDB collection, keyed by a UUID `_id`.
pub trait UuidDocument: Serialize + DeserializeOwned + Send + Sync + Unpin {
    /// Name of the collection this document type lives in.
    const COLLECTION: &'static str;

    /// The document's unique identifier.
    fn id(&self) -> Uuid;
}

/// Generic MongoDB repository for [`UuidDocument`] types.
///
/// Provides the collection plumbing shared by every resource: insert, full
/// scan, lookup, replace, and delete-returning-document. Domain-level rules
/// (what a missing id means, which fields an update touches) stay in the
/// domain crates.
pub struct MongoRepository<T: UuidDocument> {
    collection: Collection<T>,
}

impl<T: UuidDocument> MongoRepository<T> {
    /// Create a repository bound to the document type's collection.
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<T>(T::COLLECTION);
        Self { collection }
    }

    /// Create a repository with a custom collection name.
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<T>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations.
    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }

    /// Insert a new document.
    pub async fn insert(&self, document: &T) -> DatabaseResult<()> {
        self.collection.insert_one(document).await?;
        Ok(())
    }

    /// Fetch every document in the collection, in natural storage order.
    pub async fn find_all(&self) -> DatabaseResult<Vec<T>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<T> = cursor.try_collect().await?;
        Ok(documents)
    }

    /// Look up a document by its id.
    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<T>> {
        let document = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(document)
    }

    /// Replace the stored document with `document` (matched by its own id).
    ///
    /// Returns `false` when no document with that id exists.
    pub async fn replace(&self, document: &T) -> DatabaseResult<bool> {
        let result = self
            .collection
            .replace_one(Self::id_filter(document.id()), document)
            .await?;
        Ok(result.matched_count > 0)
    }

    /// Delete a document by id, returning the removed document.
    ///
    /// Returns `None` when no document with that id exists.
    pub async fn delete_by_id(&self, id: Uuid) -> DatabaseResult<Option<T>> {
        let document = self
            .collection
            .find_one_and_delete(Self::id_filter(id))
            .await?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Record {
        #[serde(rename = "_id")]
        id: Uuid,
        value: String,
    }

    impl UuidDocument for Record {
        const COLLECTION: &'static str = "records";

        fn id(&self) -> Uuid {
            self.id
        }
    }

    #[test]
    fn test_id_filter_serializes_uuid() {
        let id = Uuid::now_v7();
        let filter = MongoRepository::<Record>::id_filter(id);
        assert_eq!(
            filter.get("_id"),
            Some(&Bson::String(id.to_string()))
        );
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_insert_and_find_roundtrip() {
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let db = client.database("database_repository_test");
        let repo = MongoRepository::<Record>::new(&db);

        let record = Record {
            id: Uuid::now_v7(),
            value: "hello".to_string(),
        };
        repo.insert(&record).await.unwrap();

        let found = repo.find_by_id(record.id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().value, "hello");

        let deleted = repo.delete_by_id(record.id).await.unwrap();
        assert!(deleted.is_some());
        assert!(repo.find_by_id(record.id).await.unwrap().is_none());
    }
}
