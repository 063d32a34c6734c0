//! Feed domain entities

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_image_url, FeedValidationError};

/// Validated image source URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Create a new validated image URL
    pub fn new(url: impl Into<String>) -> Result<Self, FeedValidationError> {
        let url = url.into();
        validate_image_url(&url)?;
        Ok(Self(url))
    }

    /// Get the URL as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = FeedValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageUrl> for String {
    fn from(url: ImageUrl) -> Self {
        url.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ImageUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single feed item: metadata for one image
///
/// Immutable value with structural equality. All four fields round-trip
/// losslessly through serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedImage {
    /// Unique record identifier
    id: Uuid,

    /// Optional description text
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    /// Optional location text
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,

    /// Image source URL
    url: ImageUrl,
}

impl FeedImage {
    /// Create a new feed image record
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        url: ImageUrl,
    ) -> Self {
        Self {
            id,
            description,
            location,
            url,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn url(&self) -> &ImageUrl {
        &self.url
    }
}

/// The single persisted cache slot: an ordered list of feed images plus the
/// instant they were inserted
///
/// Image order is significant and preserved exactly as inserted. A feed with
/// zero images is still an occupied slot, distinct from "no cache".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedFeed {
    images: Vec<FeedImage>,
    timestamp: DateTime<Utc>,
}

impl CachedFeed {
    /// Create a new cached feed snapshot
    pub fn new(images: Vec<FeedImage>, timestamp: DateTime<Utc>) -> Self {
        Self { images, timestamp }
    }

    pub fn images(&self) -> &[FeedImage] {
        &self.images
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
