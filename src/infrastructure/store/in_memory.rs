//! In-memory feed store implementation

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::error::StoreError;
use crate::domain::feed::{CachedFeed, FeedStore};

/// In-memory implementation of [`FeedStore`]
///
/// Reference backend for the contract: the slot is a process-local value,
/// so operations cannot fail. Durable backends must match its observable
/// semantics exactly.
#[derive(Debug, Clone)]
pub struct InMemoryFeedStore {
    slot: Arc<RwLock<Option<CachedFeed>>>,
}

impl InMemoryFeedStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
        }
    }
}

impl Default for InMemoryFeedStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedStore for InMemoryFeedStore {
    async fn retrieve(&self) -> Result<Option<CachedFeed>, StoreError> {
        let slot = self.slot.read().await;
        Ok(slot.clone())
    }

    async fn insert(&self, feed: CachedFeed) -> Result<(), StoreError> {
        let mut slot = self.slot.write().await;
        *slot = Some(feed);
        Ok(())
    }

    async fn delete_cached_feed(&self) -> Result<(), StoreError> {
        let mut slot = self.slot.write().await;
        *slot = None;
        Ok(())
    }
}
