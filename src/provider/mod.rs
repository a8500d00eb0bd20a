//! Environmental data providers
//!
//! [`EnvironmentProvider`] is the seam between report construction and the
//! network. The production implementation talks to OpenWeatherMap; tests plug
//! in fakes returning canned payloads.

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::Coordinate;
use crate::report::ReportError;

pub mod openweather;

#[cfg(test)]
pub(crate) mod fixtures;

pub use openweather::{AirPollutionResponse, CurrentWeatherResponse, OpenWeatherClient};

/// Source of raw pollution and weather readings for a coordinate
#[async_trait]
pub trait EnvironmentProvider: Send + Sync {
    /// Current pollutant concentrations and AQI
    async fn air_pollution(
        &self,
        coordinate: Coordinate,
    ) -> Result<AirPollutionResponse, ReportError>;

    /// Current weather and nearest place name
    async fn current_weather(
        &self,
        coordinate: Coordinate,
    ) -> Result<CurrentWeatherResponse, ReportError>;
}

#[async_trait]
impl<P: EnvironmentProvider + ?Sized> EnvironmentProvider for Arc<P> {
    async fn air_pollution(
        &self,
        coordinate: Coordinate,
    ) -> Result<AirPollutionResponse, ReportError> {
        (**self).air_pollution(coordinate).await
    }

    async fn current_weather(
        &self,
        coordinate: Coordinate,
    ) -> Result<CurrentWeatherResponse, ReportError> {
        (**self).current_weather(coordinate).await
    }
}

#[async_trait]
impl<P: EnvironmentProvider + ?Sized> EnvironmentProvider for &P {
    async fn air_pollution(
        &self,
        coordinate: Coordinate,
    ) -> Result<AirPollutionResponse, ReportError> {
        (**self).air_pollution(coordinate).await
    }

    async fn current_weather(
        &self,
        coordinate: Coordinate,
    ) -> Result<CurrentWeatherResponse, ReportError> {
        (**self).current_weather(coordinate).await
    }
}
