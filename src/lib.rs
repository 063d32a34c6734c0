//! Feed Cache
//!
//! A durable, single-slot cache store for an image feed, built around a
//! behavioral contract any storage backend must satisfy:
//! - [`FeedStore`]: the three-operation contract (retrieve, insert, delete)
//!   with exact replacement, clearing, and failure semantics
//! - [`InMemoryFeedStore`]: the in-memory reference backend
//! - [`FsFeedStore`]: a file-snapshot backend with atomic replace
//! - [`SerialFeedStore`]: a wrapper giving any backend strict FIFO operation
//!   ordering under concurrent submissions
//!
//! The backend-agnostic acceptance suite under `tests/` certifies any
//! implementation against the contract.

pub mod domain;
pub mod infrastructure;

pub use domain::{CachedFeed, FeedImage, FeedStore, FeedValidationError, ImageUrl, StoreError};
pub use infrastructure::store::{FsFeedStore, InMemoryFeedStore, SerialFeedStore};
