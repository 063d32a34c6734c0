//! Image URL validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length for image URLs
pub const MAX_URL_LENGTH: usize = 2048;

/// Regex pattern for valid image URLs: scheme://non-empty-remainder,
/// no whitespace anywhere
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://\S+$").unwrap());

/// Image URL validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum FeedValidationError {
    /// URL is empty
    EmptyUrl,
    /// URL exceeds maximum length
    UrlTooLong { length: usize, max: usize },
    /// URL is not syntactically valid
    InvalidUrlFormat { url: String },
}

impl fmt::Display for FeedValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "Image URL cannot be empty"),
            Self::UrlTooLong { length, max } => {
                write!(f, "Image URL too long: {} characters (max {})", length, max)
            }
            Self::InvalidUrlFormat { url } => {
                write!(
                    f,
                    "Invalid image URL '{}': must be scheme://... with no whitespace",
                    url
                )
            }
        }
    }
}

impl std::error::Error for FeedValidationError {}

/// Validate an image URL string
pub fn validate_image_url(url: &str) -> Result<(), FeedValidationError> {
    if url.is_empty() {
        return Err(FeedValidationError::EmptyUrl);
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(FeedValidationError::UrlTooLong {
            length: url.len(),
            max: MAX_URL_LENGTH,
        });
    }

    if url.chars().any(|c| c.is_control()) || !URL_PATTERN.is_match(url) {
        return Err(FeedValidationError::InvalidUrlFormat {
            url: url.to_string(),
        });
    }

    Ok(())
}
