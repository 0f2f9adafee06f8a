//! Forecast error types

use thiserror::Error;

/// Errors that can occur while building series or fitting models.
///
/// Fit failures are non-fatal to the dashboard: they surface as a warning in
/// the forecast panel only.
#[derive(Debug, Clone, Error)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model must be fitted before prediction
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Series values are unusable (NaN, infinite)
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Month string cannot be resolved to a calendar month
    #[error("Unrecognized month name: '{0}'")]
    UnrecognizedMonth(String),
}

/// Result type for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_insufficient_data_message() {
        let error = ForecastError::InsufficientData {
            required: 24,
            actual: 10,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 24 points, got 10"
        );
    }

    #[test]
    fn test_invalid_parameter_message() {
        let error = ForecastError::InvalidParameter {
            name: "horizon".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid parameter 'horizon': must be at least 1");
    }

    #[test]
    fn test_unrecognized_month_message() {
        let error = ForecastError::UnrecognizedMonth("Febuary".to_string());
        assert_eq!(error.to_string(), "Unrecognized month name: 'Febuary'");
    }

    #[test]
    fn test_not_fitted_message() {
        assert_eq!(
            ForecastError::NotFitted.to_string(),
            "Model must be fitted before prediction"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(ForecastError::NotFitted);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_all_variants_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastError>();
    }
}
