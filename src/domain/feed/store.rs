//! Feed store contract

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::CachedFeed;
use crate::domain::error::StoreError;

/// Single-slot cache store for a feed
///
/// The backing storage holds at most one [`CachedFeed`] at any time. Insert
/// replaces the slot wholesale, delete clears it, retrieve observes it
/// without mutating. Each operation completes exactly once per call, and all
/// failures travel through the returned `Result` — never as panics.
///
/// Implementations may have arbitrary internal concurrency; callers needing
/// strict FIFO ordering across concurrent submissions wrap the store in
/// [`SerialFeedStore`](crate::infrastructure::store::SerialFeedStore).
#[async_trait]
pub trait FeedStore: Send + Sync + Debug {
    /// Read the current slot.
    ///
    /// Returns `Ok(None)` when nothing has been cached — including when the
    /// underlying storage location was never created. Returns
    /// `Ok(Some(feed))` with exactly the feed and timestamp last inserted.
    /// Returns [`StoreError::Corrupt`] when the location exists but cannot
    /// be read or decoded; the corrupt contents are left in place, so
    /// repeated retrieves keep failing until a write replaces the slot.
    async fn retrieve(&self) -> Result<Option<CachedFeed>, StoreError>;

    /// Replace the slot with `feed`, regardless of prior state.
    ///
    /// On error the slot is left exactly as it was — a failed insert never
    /// leaves a partial write behind.
    async fn insert(&self, feed: CachedFeed) -> Result<(), StoreError>;

    /// Clear the slot.
    ///
    /// Idempotent: deleting an already-empty slot succeeds. On error the
    /// slot is left exactly as it was.
    async fn delete_cached_feed(&self) -> Result<(), StoreError>;
}
