//! File-snapshot feed store implementation

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::error::StoreError;
use crate::domain::feed::{CachedFeed, FeedStore};

/// File-backed implementation of [`FeedStore`]
///
/// Persists the slot as a single JSON snapshot file at a caller-chosen
/// path. A missing file is absence; an unreadable or undecodable file is
/// corruption. Inserts are atomic: the new snapshot is written to a sibling
/// staging file and renamed over the destination, so a failed insert leaves
/// the prior snapshot intact.
#[derive(Debug, Clone)]
pub struct FsFeedStore {
    path: PathBuf,
}

impl FsFeedStore {
    /// Create a store persisting to the given snapshot path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot path this store persists to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl FeedStore for FsFeedStore {
    async fn retrieve(&self) -> Result<Option<CachedFeed>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no cache snapshot present");
                return Ok(None);
            }
            Err(e) => {
                return Err(StoreError::corrupt(format!(
                    "cannot read snapshot '{}': {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "cache snapshot is corrupt");
            StoreError::corrupt(format!(
                "cannot decode snapshot '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn insert(&self, feed: CachedFeed) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&feed)
            .map_err(|e| StoreError::write(format!("cannot encode snapshot: {}", e)))?;

        let staging = self.staging_path();

        if let Err(e) = fs::write(&staging, &bytes).await {
            return Err(StoreError::write(format!(
                "cannot write snapshot '{}': {}",
                staging.display(),
                e
            )));
        }

        if let Err(e) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(StoreError::write(format!(
                "cannot replace snapshot '{}': {}",
                self.path.display(),
                e
            )));
        }

        debug!(path = %self.path.display(), "cache snapshot replaced");
        Ok(())
    }

    async fn delete_cached_feed(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "cache snapshot deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::delete(format!(
                "cannot delete snapshot '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }
}
