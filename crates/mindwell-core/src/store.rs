//! Document database port.
//!
//! The hosted document database stores schemaless JSON documents in named
//! collections, partitioned by an owner field. The server assigns document
//! ids and creation timestamps.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Collection names used by the client.
pub mod collections {
    /// Per-user profile aggregate documents, keyed by user id.
    pub const USERS: &str = "users";
    pub const MOOD_ENTRIES: &str = "moodEntries";
    pub const JOURNAL_ENTRIES: &str = "journalEntries";
    pub const MEDITATION_SESSIONS: &str = "meditationSessions";
}

/// A stored document: the server-assigned id plus its JSON fields
/// (including the server-assigned `createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

impl Document {
    /// Deserializes the document fields into a typed model.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }
}

/// A single write in an atomic batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WriteOp {
    /// Insert a new document; the server assigns id and `createdAt`.
    #[serde(rename_all = "camelCase")]
    Insert { collection: String, document: Value },
    /// Create or replace a document under a caller-chosen id.
    #[serde(rename_all = "camelCase")]
    Upsert {
        collection: String,
        id: String,
        document: Value,
    },
    /// Atomically add `by` to a numeric field of an existing document.
    #[serde(rename_all = "camelCase")]
    Increment {
        collection: String,
        id: String,
        field: String,
        by: i64,
    },
}

/// An atomic batch of writes: the backend applies all of them or none.
///
/// Entry-save paths commit the entry insert and the matching profile counter
/// increment in one batch, so the counters cannot drift from the record
/// counts under partial failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteBatch {
    pub writes: Vec<WriteOp>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(mut self, collection: &str, document: Value) -> Self {
        self.writes.push(WriteOp::Insert {
            collection: collection.to_string(),
            document,
        });
        self
    }

    pub fn upsert(mut self, collection: &str, id: &str, document: Value) -> Self {
        self.writes.push(WriteOp::Upsert {
            collection: collection.to_string(),
            id: id.to_string(),
            document,
        });
        self
    }

    pub fn increment(mut self, collection: &str, id: &str, field: &str, by: i64) -> Self {
        self.writes.push(WriteOp::Increment {
            collection: collection.to_string(),
            id: id.to_string(),
            field: field.to_string(),
            by,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}

/// Capability set of the hosted document database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a document; returns it with the server-assigned id and
    /// creation timestamp.
    async fn insert(&self, collection: &str, document: Value) -> Result<Document>;

    /// Creates or replaces a document under the given id.
    async fn upsert(&self, collection: &str, id: &str, document: Value) -> Result<()>;

    /// Atomically adds `by` to a numeric field of the document.
    async fn increment(&self, collection: &str, id: &str, field: &str, by: i64) -> Result<()>;

    /// Fetches a single document by id; `None` when it does not exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Queries a collection filtered by owner, ordered by creation time
    /// descending, limited to `limit` rows.
    async fn query_owned(
        &self,
        collection: &str,
        owner_id: &str,
        limit: usize,
    ) -> Result<Vec<Document>>;

    /// Applies a batch of writes atomically (all-or-nothing).
    async fn commit(&self, batch: WriteBatch) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_builder_preserves_order() {
        let batch = WriteBatch::new()
            .insert(collections::MOOD_ENTRIES, json!({"mood": "happy"}))
            .increment(collections::USERS, "u-1", "moodEntries", 1);

        assert_eq!(batch.writes.len(), 2);
        assert!(matches!(batch.writes[0], WriteOp::Insert { .. }));
        assert!(matches!(batch.writes[1], WriteOp::Increment { .. }));
    }

    #[test]
    fn test_write_op_wire_shape() {
        let op = WriteOp::Increment {
            collection: collections::USERS.to_string(),
            id: "u-1".to_string(),
            field: "moodEntries".to_string(),
            by: 1,
        };
        let wire = serde_json::to_value(&op).unwrap();
        assert_eq!(
            wire,
            json!({"increment": {"collection": "users", "id": "u-1", "field": "moodEntries", "by": 1}})
        );
    }

    #[test]
    fn test_document_parse() {
        #[derive(serde::Deserialize)]
        struct Row {
            mood: String,
        }
        let doc = Document {
            id: "d-1".to_string(),
            data: json!({"mood": "happy", "emoji": "😄"}),
        };
        let row: Row = doc.parse().unwrap();
        assert_eq!(row.mood, "happy");
    }
}
