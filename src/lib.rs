//! `airwatch` - Air quality and weather reports for a coordinate
//!
//! This library fetches current pollution and weather readings from a
//! provider, validates them, and assembles an [`EnvironmentalReport`] ready
//! for display by the CLI or the HTTP service.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod report;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use config::AirwatchConfig;
pub use error::AirwatchError;
pub use models::{AqiIndex, AqiLevel, Coordinate, EnvironmentalReport, WeatherSnapshot};
pub use provider::{EnvironmentProvider, OpenWeatherClient};
pub use report::{ReportBuilder, ReportError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
