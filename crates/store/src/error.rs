//! Store error types.

use thiserror::Error;

use gageboek_core::entry::EntryError;
use gageboek_core::vat::VatError;
use gageboek_shared::AppError;

/// Entry store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entry (or backing object) does not exist.
    #[error("entry not found: {0}")]
    NotFound(String),

    /// Entry fields failed validation.
    #[error(transparent)]
    InvalidEntry(#[from] EntryError),

    /// Gross amount failed validation in the VAT calculator.
    #[error(transparent)]
    InvalidAmount(#[from] VatError),

    /// Storage provider configuration error.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// Stored object could not be encoded or decoded.
    #[error("failed to encode or decode entry: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage backend operation failed.
    #[error("storage operation failed: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns true for the two validation variants.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidEntry(_) | Self::InvalidAmount(_))
    }
}

impl From<opendal::Error> for StoreError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::NotFound => Self::NotFound(err.to_string()),
            _ => Self::Backend(err.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => Self::NotFound(msg),
            StoreError::InvalidEntry(e) => Self::Validation(e.to_string()),
            StoreError::InvalidAmount(e) => Self::Validation(e.to_string()),
            StoreError::Configuration(msg) | StoreError::Backend(msg) => Self::Storage(msg),
            StoreError::Serialization(e) => Self::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_mapping() {
        let err = AppError::from(StoreError::NotFound("abc".to_string()));
        assert_eq!(err.status_code(), 404);

        let err = AppError::from(StoreError::InvalidEntry(EntryError::EmptyDescription));
        assert_eq!(err.status_code(), 400);

        let err = AppError::from(StoreError::Backend("boom".to_string()));
        assert_eq!(err.status_code(), 500);
    }
}
