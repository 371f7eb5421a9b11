//! REST client for the hosted document database.

use std::time::Duration;

use async_trait::async_trait;
use mindwell_core::auth::TokenCell;
use mindwell_core::error::{MindwellError, Result};
use mindwell_core::store::{Document, DocumentStore, WriteBatch};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::auth_api::read_error;
use crate::config::BackendConfig;

const WRITE_TIMEOUT: Duration = Duration::from_secs(10);
const QUERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Document database client.
///
/// Requests carry the current user's bearer token, read per call from the
/// shared [`TokenCell`] the auth gateway keeps up to date.
#[derive(Clone)]
pub struct RestDocumentStore {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    token: TokenCell,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    documents: Vec<Value>,
}

impl RestDocumentStore {
    pub fn new(config: &BackendConfig, token: TokenCell) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            token,
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/v1/collections/{}/documents", self.base_url, collection)
    }

    /// Attaches the project API key and the user's bearer token.
    fn auth_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = if let Some(api_key) = &self.api_key {
            request.header("X-Api-Key", api_key)
        } else {
            request
        };

        if let Some(token) = self.token.get() {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    /// Parses a document body of the form `{"id": ..., fields...}`.
    fn parse_document(mut value: Value) -> Result<Document> {
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| MindwellError::backend("Document response missing id"))?;

        if let Some(fields) = value.as_object_mut() {
            fields.remove("id");
        }

        Ok(Document { id, data: value })
    }
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<Document> {
        let request = self.auth_request(
            self.client
                .post(self.collection_url(collection))
                .json(&document)
                .timeout(WRITE_TIMEOUT),
        );

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                let body: Value = response
                    .json()
                    .await
                    .map_err(|e| MindwellError::backend(e.to_string()))?;
                Self::parse_document(body)
            }
            Ok(response) => Err(MindwellError::backend(read_error(response).await)),
            Err(e) => Err(MindwellError::backend(e.to_string())),
        }
    }

    async fn upsert(&self, collection: &str, id: &str, document: Value) -> Result<()> {
        let url = format!("{}/{}", self.collection_url(collection), id);
        let request = self.auth_request(
            self.client
                .put(&url)
                .json(&document)
                .timeout(WRITE_TIMEOUT),
        );

        match request.send().await {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => Err(MindwellError::backend(read_error(response).await)),
            Err(e) => Err(MindwellError::backend(e.to_string())),
        }
    }

    async fn increment(&self, collection: &str, id: &str, field: &str, by: i64) -> Result<()> {
        let url = format!("{}/{}", self.collection_url(collection), id);
        let body = serde_json::json!({ "increment": { field: by } });
        let request = self.auth_request(self.client.patch(&url).json(&body).timeout(WRITE_TIMEOUT));

        match request.send().await {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => Err(MindwellError::backend(read_error(response).await)),
            Err(e) => Err(MindwellError::backend(e.to_string())),
        }
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let url = format!("{}/{}", self.collection_url(collection), id);
        let request = self.auth_request(self.client.get(&url).timeout(WRITE_TIMEOUT));

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                let body: Value = response
                    .json()
                    .await
                    .map_err(|e| MindwellError::backend(e.to_string()))?;
                Ok(Some(Self::parse_document(body)?))
            }
            Ok(response) if response.status().as_u16() == 404 => {
                tracing::debug!("[DocumentApi] {}/{} not found", collection, id);
                Ok(None)
            }
            Ok(response) => Err(MindwellError::backend(read_error(response).await)),
            Err(e) => Err(MindwellError::backend(e.to_string())),
        }
    }

    async fn query_owned(
        &self,
        collection: &str,
        owner_id: &str,
        limit: usize,
    ) -> Result<Vec<Document>> {
        let limit = limit.to_string();
        let request = self.auth_request(
            self.client
                .get(self.collection_url(collection))
                .query(&[("owner", owner_id), ("limit", limit.as_str())])
                .timeout(QUERY_TIMEOUT),
        );

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                let body: QueryResponse = response
                    .json()
                    .await
                    .map_err(|e| MindwellError::backend(e.to_string()))?;
                body.documents
                    .into_iter()
                    .map(Self::parse_document)
                    .collect()
            }
            Ok(response) => Err(MindwellError::backend(read_error(response).await)),
            Err(e) => Err(MindwellError::backend(e.to_string())),
        }
    }

    async fn commit(&self, batch: WriteBatch) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let url = format!("{}/v1/documents:commit", self.base_url);
        let request = self.auth_request(self.client.post(&url).json(&batch).timeout(WRITE_TIMEOUT));

        match request.send().await {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => {
                let message = read_error(response).await;
                tracing::warn!("[DocumentApi] Commit rejected: {}", message);
                Err(MindwellError::backend(message))
            }
            Err(e) => Err(MindwellError::backend(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_document_splits_id_from_fields() {
        let doc = RestDocumentStore::parse_document(json!({
            "id": "d-1",
            "mood": "happy",
            "createdAt": "2026-08-07T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(doc.id, "d-1");
        assert_eq!(doc.data["mood"], "happy");
        assert!(doc.data.get("id").is_none());
    }

    #[test]
    fn test_parse_document_without_id_is_error() {
        let result = RestDocumentStore::parse_document(json!({"mood": "happy"}));
        assert!(result.is_err());
    }
}
