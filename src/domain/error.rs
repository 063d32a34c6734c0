use thiserror::Error;

/// Failures a cache store can report.
///
/// Absence of cached data is not an error; stores report it as `Ok(None)`
/// from `retrieve`. Every variant here leaves the persisted slot exactly as
/// it was before the failing operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage location exists but its contents cannot be read or
    /// decoded. Stable across repeated retrieves until an insert or delete
    /// replaces the slot.
    #[error("Corrupt cache data: {message}")]
    Corrupt { message: String },

    /// An insert could not persist the new snapshot.
    #[error("Cache write failed: {message}")]
    Write { message: String },

    /// A delete could not modify the storage location.
    #[error("Cache delete failed: {message}")]
    Delete { message: String },
}

impl StoreError {
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }

    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }

    pub fn delete(message: impl Into<String>) -> Self {
        Self::Delete {
            message: message.into(),
        }
    }
}
