//! Domain error types.
//!
//! These errors represent validation failures on station records. They are
//! distinct from loading and storage errors.

/// Validation errors for station records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Station name is empty or whitespace
    #[error("station name must not be empty")]
    EmptyName,

    /// Latitude is not a finite value in [-90, 90]
    #[error("invalid latitude: {0}")]
    InvalidLatitude(f64),

    /// Longitude is not a finite value in [-180, 180]
    #[error("invalid longitude: {0}")]
    InvalidLongitude(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            DomainError::EmptyName.to_string(),
            "station name must not be empty"
        );
        assert_eq!(
            DomainError::InvalidLatitude(95.5).to_string(),
            "invalid latitude: 95.5"
        );
        assert_eq!(
            DomainError::InvalidLongitude(-181.0).to_string(),
            "invalid longitude: -181"
        );
    }
}
