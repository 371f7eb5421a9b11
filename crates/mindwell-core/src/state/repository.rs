//! State repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::state::model::UiState;

/// Repository for the durable UI-state snapshot.
///
/// Implementations cache the record in memory and write the whole snapshot
/// through on every save, so the durable copy is never more than one
/// mutation stale.
#[async_trait]
pub trait StateRepository: Send + Sync {
    async fn get_state(&self) -> UiState;

    async fn save_state(&self, state: UiState) -> Result<()>;
}
