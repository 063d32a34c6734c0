//! Domain layer - record model, failure taxonomy, and store contract

pub mod error;
pub mod feed;

pub use error::StoreError;
pub use feed::{
    validate_image_url, CachedFeed, FeedImage, FeedStore, FeedValidationError, ImageUrl,
};
