//! Data models for the airwatch application
//!
//! This module contains the core domain models organized by concern:
//! - Coordinate: the location a report is built for
//! - Air quality: pollutant concentrations and the AQI scale
//! - Weather: current conditions at the coordinate
//! - Report: the assembled value handed to renderers

pub mod air_quality;
pub mod coordinate;
pub mod report;
pub mod weather;

// Re-export all public types for convenient access
pub use air_quality::{AqiIndex, AqiLevel, AqiScaleBand, Pollutant, PollutantReadings};
pub use coordinate::Coordinate;
pub use report::{EnvironmentalReport, TrendSample};
pub use weather::{LOCATION_NOT_FOUND, WeatherSnapshot};
