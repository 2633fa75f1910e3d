//! Station store error types.

use crate::domain::DomainError;

/// Errors from the cache and the demo write path.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed
    #[error("cache error: {message}")]
    Cache { message: String },

    /// Incoming record failed validation
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::from(DomainError::EmptyName);
        assert_eq!(err.to_string(), "station name must not be empty");

        let err = StoreError::Cache {
            message: "disk full".into(),
        };
        assert_eq!(err.to_string(), "cache error: disk full");
    }
}
