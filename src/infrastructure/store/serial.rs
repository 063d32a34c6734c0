//! FIFO serialization wrapper for feed stores

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::domain::error::StoreError;
use crate::domain::feed::{CachedFeed, FeedStore};

enum StoreCommand {
    Retrieve {
        reply: oneshot::Sender<Result<Option<CachedFeed>, StoreError>>,
    },
    Insert {
        feed: CachedFeed,
        reply: oneshot::Sender<Result<(), StoreError>>,
    },
    Delete {
        reply: oneshot::Sender<Result<(), StoreError>>,
    },
}

impl std::fmt::Debug for StoreCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Retrieve { .. } => write!(f, "Retrieve"),
            Self::Insert { .. } => write!(f, "Insert"),
            Self::Delete { .. } => write!(f, "Delete"),
        }
    }
}

/// Wrapper enforcing strict FIFO execution across concurrent submissions
///
/// All operations submitted through any clone of this handle are queued on a
/// single channel and executed by one task owning the inner store. The queue
/// send defines submission order; the task fully executes each operation and
/// delivers its completion before receiving the next, so operations never
/// interleave, reorder, or run concurrently against the same store instance.
///
/// Dropping every handle closes the queue and ends the task. A submitted
/// operation is never cancelled: it always runs to completion, even if the
/// submitting caller has stopped waiting for the result.
#[derive(Debug, Clone)]
pub struct SerialFeedStore {
    commands: mpsc::UnboundedSender<StoreCommand>,
}

impl SerialFeedStore {
    /// Wrap `store`, spawning the task that owns it
    pub fn new<S>(store: S) -> Self
    where
        S: FeedStore + 'static,
    {
        let (commands, queue) = mpsc::unbounded_channel();
        tokio::spawn(run_store_loop(store, queue));
        Self { commands }
    }
}

async fn run_store_loop<S: FeedStore>(store: S, mut queue: mpsc::UnboundedReceiver<StoreCommand>) {
    while let Some(command) = queue.recv().await {
        // Completion is sent before the next command is received; a caller
        // that dropped its receiver just discards the result.
        match command {
            StoreCommand::Retrieve { reply } => {
                let _ = reply.send(store.retrieve().await);
            }
            StoreCommand::Insert { feed, reply } => {
                let _ = reply.send(store.insert(feed).await);
            }
            StoreCommand::Delete { reply } => {
                let _ = reply.send(store.delete_cached_feed().await);
            }
        }
    }

    debug!("serial feed store loop finished");
}

#[async_trait]
impl FeedStore for SerialFeedStore {
    async fn retrieve(&self) -> Result<Option<CachedFeed>, StoreError> {
        let (reply, response) = oneshot::channel();

        self.commands
            .send(StoreCommand::Retrieve { reply })
            .map_err(|_| StoreError::corrupt("store task stopped"))?;

        response
            .await
            .unwrap_or_else(|_| Err(StoreError::corrupt("store task stopped")))
    }

    async fn insert(&self, feed: CachedFeed) -> Result<(), StoreError> {
        let (reply, response) = oneshot::channel();

        self.commands
            .send(StoreCommand::Insert { feed, reply })
            .map_err(|_| StoreError::write("store task stopped"))?;

        response
            .await
            .unwrap_or_else(|_| Err(StoreError::write("store task stopped")))
    }

    async fn delete_cached_feed(&self) -> Result<(), StoreError> {
        let (reply, response) = oneshot::channel();

        self.commands
            .send(StoreCommand::Delete { reply })
            .map_err(|_| StoreError::delete("store task stopped"))?;

        response
            .await
            .unwrap_or_else(|_| Err(StoreError::delete("store task stopped")))
    }
}
