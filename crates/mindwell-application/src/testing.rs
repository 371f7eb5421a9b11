//! In-memory fakes of the backend ports, for application-layer tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use mindwell_core::auth::{AuthBackend, AuthTokens, AuthenticatedUser, CredentialStore, Session};
use mindwell_core::error::{MindwellError, Result};
use mindwell_core::state::{StateRepository, UiState};
use mindwell_core::store::{Document, DocumentStore, WriteBatch, WriteOp};
use serde_json::Value;

// ============================================================================
// Auth service fake
// ============================================================================

#[derive(Debug, Clone)]
struct FakeAccount {
    user_id: String,
    password: String,
    display_name: Option<String>,
}

#[derive(Default)]
pub struct FakeAuthBackend {
    accounts: Mutex<HashMap<String, FakeAccount>>,
    calls: AtomicUsize,
}

impl FakeAuthBackend {
    pub fn seed_account(&self, email: &str, password: &str, display_name: Option<&str>) {
        let mut accounts = self.accounts.lock().unwrap();
        let user_id = format!("u-{}", accounts.len() + 1);
        accounts.insert(
            email.to_string(),
            FakeAccount {
                user_id,
                password: password.to_string(),
                display_name: display_name.map(str::to_string),
            },
        );
    }

    /// Number of requests the fake has received; validation failures must
    /// leave this at zero.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn user(email: &str, account: &FakeAccount) -> AuthenticatedUser {
        AuthenticatedUser {
            session: Session {
                user_id: account.user_id.clone(),
                display_name: account.display_name.clone(),
                email: email.to_string(),
            },
            tokens: AuthTokens {
                id_token: format!("id-{}", account.user_id),
                refresh_token: format!("rt-{}", account.user_id),
            },
        }
    }
}

#[async_trait]
impl AuthBackend for FakeAuthBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let accounts = self.accounts.lock().unwrap();
        match accounts.get(email) {
            Some(account) if account.password == password => Ok(Self::user(email, account)),
            _ => Err(MindwellError::auth("Invalid email or password")),
        }
    }

    async fn create_account(&self, email: &str, password: &str) -> Result<AuthenticatedUser> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(MindwellError::auth("Email already in use"));
        }
        let account = FakeAccount {
            user_id: format!("u-{}", uuid::Uuid::new_v4()),
            password: password.to_string(),
            display_name: None,
        };
        accounts.insert(email.to_string(), account.clone());
        Ok(Self::user(email, &account))
    }

    async fn set_display_name(&self, tokens: &AuthTokens, display_name: &str) -> Result<Session> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let user_id = tokens
            .id_token
            .strip_prefix("id-")
            .ok_or_else(|| MindwellError::auth("Invalid token"))?;

        let mut accounts = self.accounts.lock().unwrap();
        for (email, account) in accounts.iter_mut() {
            if account.user_id == user_id {
                account.display_name = Some(display_name.to_string());
                return Ok(Session {
                    user_id: account.user_id.clone(),
                    display_name: account.display_name.clone(),
                    email: email.clone(),
                });
            }
        }
        Err(MindwellError::auth("Account not found"))
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthenticatedUser> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let user_id = refresh_token
            .strip_prefix("rt-")
            .ok_or_else(|| MindwellError::auth("Invalid refresh token"))?;

        let accounts = self.accounts.lock().unwrap();
        accounts
            .iter()
            .find(|(_, account)| account.user_id == user_id)
            .map(|(email, account)| Self::user(email, account))
            .ok_or_else(|| MindwellError::auth("Invalid refresh token"))
    }

    async fn revoke(&self, _tokens: &AuthTokens) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Document database fake
// ============================================================================

#[derive(Debug, Clone)]
struct StoredDoc {
    id: String,
    data: Value,
    seq: u64,
}

#[derive(Debug, Clone, Default)]
struct StoreState {
    collections: HashMap<String, Vec<StoredDoc>>,
    seq: u64,
}

impl StoreState {
    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn insert(&mut self, collection: &str, mut data: Value) -> Document {
        let seq = self.next_seq();
        let id = format!("d-{}", uuid::Uuid::new_v4());
        if let Some(fields) = data.as_object_mut() {
            fields.insert("createdAt".to_string(), serde_json::json!(Utc::now()));
        }
        let doc = StoredDoc {
            id: id.clone(),
            data: data.clone(),
            seq,
        };
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        Document { id, data }
    }

    fn upsert(&mut self, collection: &str, id: &str, mut data: Value) {
        let seq = self.next_seq();
        if let Some(fields) = data.as_object_mut() {
            fields.insert("createdAt".to_string(), serde_json::json!(Utc::now()));
        }
        let docs = self.collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|doc| doc.id == id) {
            Some(existing) => existing.data = data,
            None => docs.push(StoredDoc {
                id: id.to_string(),
                data,
                seq,
            }),
        }
    }

    fn increment(&mut self, collection: &str, id: &str, field: &str, by: i64) -> Result<()> {
        let doc = self
            .collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or_else(|| MindwellError::not_found("document", id))?;

        let fields = doc
            .data
            .as_object_mut()
            .ok_or_else(|| MindwellError::internal("document is not an object"))?;
        let current = fields.get(field).and_then(Value::as_i64).unwrap_or(0);
        fields.insert(field.to_string(), serde_json::json!(current + by));
        Ok(())
    }

    fn apply(&mut self, op: &WriteOp) -> Result<()> {
        match op {
            WriteOp::Insert {
                collection,
                document,
            } => {
                self.insert(collection, document.clone());
                Ok(())
            }
            WriteOp::Upsert {
                collection,
                id,
                document,
            } => {
                self.upsert(collection, id, document.clone());
                Ok(())
            }
            WriteOp::Increment {
                collection,
                id,
                field,
                by,
            } => self.increment(collection, id, field, *by),
        }
    }
}

#[derive(Default)]
pub struct FakeDocumentStore {
    state: Mutex<StoreState>,
    writes: AtomicUsize,
    fail_next_commit: AtomicBool,
}

impl FakeDocumentStore {
    /// Number of write requests received (inserts, upserts, increments, and
    /// commits each count once); validation failures must leave this at zero.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Makes the next commit fail without applying any of its writes.
    pub fn fail_next_commit(&self) {
        self.fail_next_commit.store(true, Ordering::SeqCst);
    }

    pub fn count_documents(&self, collection: &str) -> usize {
        let state = self.state.lock().unwrap();
        state
            .collections
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for FakeDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<Document> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        Ok(state.insert(collection, document))
    }

    async fn upsert(&self, collection: &str, id: &str, document: Value) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        state.upsert(collection, id, document);
        Ok(())
    }

    async fn increment(&self, collection: &str, id: &str, field: &str, by: i64) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        state.increment(collection, id, field, by)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .map(|doc| Document {
                id: doc.id.clone(),
                data: doc.data.clone(),
            }))
    }

    async fn query_owned(
        &self,
        collection: &str,
        owner_id: &str,
        limit: usize,
    ) -> Result<Vec<Document>> {
        let state = self.state.lock().unwrap();
        let mut docs: Vec<&StoredDoc> = state
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| doc.data.get("userId").and_then(Value::as_str) == Some(owner_id))
                    .collect()
            })
            .unwrap_or_default();

        // Newest first; seq tracks creation order.
        docs.sort_by(|a, b| b.seq.cmp(&a.seq));
        Ok(docs
            .into_iter()
            .take(limit)
            .map(|doc| Document {
                id: doc.id.clone(),
                data: doc.data.clone(),
            })
            .collect())
    }

    async fn commit(&self, batch: WriteBatch) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_commit.swap(false, Ordering::SeqCst) {
            return Err(MindwellError::backend("Transaction aborted"));
        }

        // All-or-nothing: stage against a copy, swap in only on success.
        let mut state = self.state.lock().unwrap();
        let mut staged = state.clone();
        for op in &batch.writes {
            staged.apply(op)?;
        }
        *state = staged;
        Ok(())
    }
}

// ============================================================================
// State repository fake
// ============================================================================

#[derive(Default)]
pub struct MemoryStateRepository {
    state: Mutex<UiState>,
    saves: AtomicUsize,
}

impl MemoryStateRepository {
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// The durable copy as of the last save.
    pub async fn persisted(&self) -> UiState {
        self.state.lock().unwrap().clone()
    }
}

#[async_trait]
impl StateRepository for MemoryStateRepository {
    async fn get_state(&self) -> UiState {
        self.state.lock().unwrap().clone()
    }

    async fn save_state(&self, state: UiState) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.state.lock().unwrap() = state;
        Ok(())
    }
}

// ============================================================================
// Credential store fake
// ============================================================================

#[derive(Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().unwrap().clone())
    }

    async fn save(&self, refresh_token: &str) -> Result<()> {
        *self.token.lock().unwrap() = Some(refresh_token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
