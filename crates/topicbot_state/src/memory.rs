//! Volatile cooldown store.

use crate::CooldownStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use topicbot_core::CooldownState;
use topicbot_error::StorageResult;

/// In-memory store; clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemoryCooldownStore {
    state: Arc<RwLock<CooldownState>>,
}

impl MemoryCooldownStore {
    /// Store with no active cooldown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with `state`.
    pub fn with_state(state: CooldownState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// The last saved state.
    pub async fn snapshot(&self) -> CooldownState {
        *self.state.read().await
    }
}

#[async_trait]
impl CooldownStore for MemoryCooldownStore {
    async fn load(&self) -> CooldownState {
        *self.state.read().await
    }

    async fn save(&self, state: &CooldownState) -> StorageResult<()> {
        *self.state.write().await = *state;
        Ok(())
    }
}
