use thiserror::Error;

/// Reasons a report could not be built
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error("No air quality readings available for this coordinate")]
    NoDataAvailable,

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("AQI index {0} is outside the 1-5 scale")]
    InvalidAqi(i64),

    #[error("Provider unreachable: {0}")]
    ProviderUnreachable(String),
}

impl ReportError {
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        ReportError::MalformedResponse(message.into())
    }

    pub fn unreachable<S: Into<String>>(message: S) -> Self {
        ReportError::ProviderUnreachable(message.into())
    }

    /// Stable machine-readable name of the failure
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ReportError::NoDataAvailable => "no_data_available",
            ReportError::MalformedResponse(_) => "malformed_response",
            ReportError::InvalidAqi(_) => "invalid_aqi",
            ReportError::ProviderUnreachable(_) => "provider_unreachable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(ReportError::NoDataAvailable.kind(), "no_data_available");
        assert_eq!(ReportError::malformed("x").kind(), "malformed_response");
        assert_eq!(ReportError::InvalidAqi(0).kind(), "invalid_aqi");
        assert_eq!(ReportError::unreachable("x").kind(), "provider_unreachable");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ReportError::InvalidAqi(6).to_string(),
            "AQI index 6 is outside the 1-5 scale"
        );
        assert!(
            ReportError::malformed("missing pollutant 'co'")
                .to_string()
                .contains("'co'")
        );
    }
}
