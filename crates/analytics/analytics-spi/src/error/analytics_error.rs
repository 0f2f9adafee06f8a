//! Analytics error types.

use thiserror::Error;

/// Errors raised while building a filter specification.
///
/// Aggregates themselves never fail: empty selections degrade to
/// placeholders and malformed month labels drop out of calendar-keyed
/// views silently.
#[derive(Debug, Clone, Error)]
pub enum AnalyticsError {
    /// Builder field that was never set
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Year range with min greater than max
    #[error("Invalid year range: {min} > {max}")]
    InvalidYearRange { min: i32, max: i32 },
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let error = AnalyticsError::MissingField("regions");
        assert_eq!(error.to_string(), "Missing required field: regions");
    }

    #[test]
    fn test_invalid_year_range_message() {
        let error = AnalyticsError::InvalidYearRange {
            min: 2021,
            max: 2019,
        };
        assert_eq!(error.to_string(), "Invalid year range: 2021 > 2019");
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(AnalyticsError::MissingField("year_range"));
        assert!(error.source().is_none());
    }
}
