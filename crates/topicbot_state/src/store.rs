//! Store contract.

use async_trait::async_trait;
use topicbot_core::CooldownState;
use topicbot_error::StorageResult;

/// Durable single-record store holding the cooldown deadline.
#[async_trait]
pub trait CooldownStore: Send + Sync {
    /// Read the persisted state.
    ///
    /// Never fails: a missing, unreadable or malformed record yields
    /// `CooldownState::open()` so that bad state cannot block startup.
    async fn load(&self) -> CooldownState;

    /// Atomically replace the persisted record.
    ///
    /// # Errors
    ///
    /// Returns error if the record cannot be encoded or written.
    async fn save(&self, state: &CooldownState) -> StorageResult<()>;
}
