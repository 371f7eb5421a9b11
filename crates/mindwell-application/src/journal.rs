//! Journaling use case.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mindwell_core::entries::JournalEntry;
use mindwell_core::error::{MindwellError, Result};
use mindwell_core::profile::COUNTER_JOURNAL;
use mindwell_core::store::{DocumentStore, WriteBatch, collections};
use mindwell_core::timefmt::format_relative;

use crate::auth_gateway::AuthGateway;
use crate::view::{JournalRow, ListView, Notice};

const PAGE_SIZE: usize = 5;

pub struct JournalService {
    auth: Arc<AuthGateway>,
    store: Arc<dyn DocumentStore>,
}

impl JournalService {
    pub fn new(auth: Arc<AuthGateway>, store: Arc<dyn DocumentStore>) -> Self {
        Self { auth, store }
    }

    /// Saves a journal entry; the insert and the counter increment are one
    /// atomic batch.
    pub async fn save_entry(&self, content: &str) -> Result<Notice> {
        if content.trim().is_empty() {
            return Err(MindwellError::validation(
                "Please write something in your journal",
            ));
        }

        let session = self.auth.require_session().await?;
        let entry = JournalEntry::new(content, &session.user_id);

        let batch = WriteBatch::new()
            .insert(collections::JOURNAL_ENTRIES, serde_json::to_value(&entry)?)
            .increment(collections::USERS, &session.user_id, COUNTER_JOURNAL, 1);

        match self.store.commit(batch).await {
            Ok(()) => Ok(Notice::success("Journal entry saved successfully!")),
            Err(e) => {
                tracing::error!("[Journal] Failed to save entry: {}", e);
                Err(MindwellError::backend(
                    "Error saving journal entry. Please try again.",
                ))
            }
        }
    }

    /// The 5 most recent entries for the current user, newest first.
    pub async fn load_entries(&self) -> ListView<JournalRow> {
        let Some(session) = self.auth.current_session().await else {
            tracing::warn!("[Journal] Entries requested without a session");
            return ListView::Error;
        };

        let docs = match self
            .store
            .query_owned(collections::JOURNAL_ENTRIES, &session.user_id, PAGE_SIZE)
            .await
        {
            Ok(docs) => docs,
            Err(e) => {
                tracing::error!("[Journal] Failed to load entries: {}", e);
                return ListView::Error;
            }
        };

        let entries: Vec<JournalEntry> = match docs.iter().map(|doc| doc.parse()).collect() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("[Journal] Malformed entry: {}", e);
                return ListView::Error;
            }
        };

        rows(&entries, Utc::now())
    }
}

fn rows(entries: &[JournalEntry], now: DateTime<Utc>) -> ListView<JournalRow> {
    if entries.is_empty() {
        return ListView::Empty;
    }

    ListView::Rows(
        entries
            .iter()
            .map(|entry| JournalRow {
                title: "Journal Entry".to_string(),
                timestamp: format_relative(entry.created_at, now),
                content: entry.content.clone(),
            })
            .collect(),
    )
}
