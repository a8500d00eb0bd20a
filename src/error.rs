//! Error types and handling for the `airwatch` application

use crate::report::ReportError;
use thiserror::Error;

/// Main error type for the `airwatch` application
#[derive(Error, Debug)]
pub enum AirwatchError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Report construction failed
    #[error("Report error: {source}")]
    Report {
        #[from]
        source: ReportError,
    },
}

impl AirwatchError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AirwatchError::Config { message } => {
                format!("Configuration error: {message}")
            }
            AirwatchError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            AirwatchError::Report { source } => match source {
                ReportError::NoDataAvailable => {
                    "No air quality data is available for this location.".to_string()
                }
                ReportError::ProviderUnreachable(_) => {
                    "Unable to reach the weather service. Please check your internet connection."
                        .to_string()
                }
                ReportError::MalformedResponse(_) | ReportError::InvalidAqi(_) => {
                    "The weather service returned unexpected data. Please try again later."
                        .to_string()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = AirwatchError::config("missing API key");
        assert!(matches!(config_err, AirwatchError::Config { .. }));

        let validation_err = AirwatchError::validation("invalid coordinates");
        assert!(matches!(validation_err, AirwatchError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = AirwatchError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = AirwatchError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));

        let unreachable: AirwatchError =
            ReportError::ProviderUnreachable("connection refused".into()).into();
        assert!(unreachable.user_message().contains("Unable to reach"));

        let no_data: AirwatchError = ReportError::NoDataAvailable.into();
        assert!(no_data.user_message().contains("No air quality data"));
    }

    #[test]
    fn test_report_error_conversion() {
        let err: AirwatchError = ReportError::InvalidAqi(7).into();
        assert!(matches!(
            err,
            AirwatchError::Report {
                source: ReportError::InvalidAqi(7)
            }
        ));
        assert!(err.to_string().contains("7"));
    }
}
