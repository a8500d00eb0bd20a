//! OpenWeatherMap client
//!
//! Reads the `air_pollution` and `weather` endpoints of the OpenWeatherMap
//! 2.5 API. Response structures keep every field optional so that gaps in the
//! payload are reported by the report builder as malformed data with the
//! offending field named, instead of surfacing as opaque decode errors.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::EnvironmentProvider;
use crate::AirwatchError;
use crate::config::ProviderConfig;
use crate::models::Coordinate;
use crate::report::ReportError;

/// Response of `GET /air_pollution`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirPollutionResponse {
    pub coord: Option<ResponseCoordinate>,
    pub list: Option<Vec<PollutionReading>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseCoordinate {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Single pollution reading
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollutionReading {
    /// Unix timestamp (seconds) of the measurement
    pub dt: Option<i64>,
    pub main: Option<PollutionMain>,
    /// Concentrations in μg/m³ keyed by pollutant (`pm2_5`, `co`, ...)
    pub components: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollutionMain {
    pub aqi: Option<i64>,
}

/// Response of `GET /weather` with `units=metric`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    pub dt: Option<i64>,
    /// Nearest place; empty over open water
    pub name: Option<String>,
    pub sys: Option<WeatherSys>,
    pub main: Option<WeatherMain>,
    pub wind: Option<WeatherWind>,
    pub weather: Option<Vec<WeatherCondition>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSys {
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherMain {
    /// Celsius
    pub temp: Option<f64>,
    /// Percent
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherWind {
    /// m/s
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub main: Option<String>,
    pub description: Option<String>,
}

/// HTTP client for the OpenWeatherMap API
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Create a client from provider settings. An API key is required.
    pub fn new(config: &ProviderConfig) -> Result<Self, AirwatchError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AirwatchError::config(
                    "Missing provider API key. Set provider.api_key or AIRWATCH__PROVIDER__API_KEY.",
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("airwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AirwatchError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Issue a GET against `endpoint` for a coordinate and decode the JSON body
    #[instrument(skip(self, extra_query))]
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        coordinate: Coordinate,
        extra_query: &[(&str, &str)],
    ) -> Result<T, ReportError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let start_time = Instant::now();

        debug!("Requesting {} for {}", endpoint, coordinate);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", coordinate.latitude.to_string()),
                ("lon", coordinate.longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .query(extra_query)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Provider returned HTTP {} for {}", status, endpoint);
            return Err(ReportError::unreachable(format!(
                "{endpoint} returned HTTP {status}"
            )));
        }

        let body = response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                ReportError::malformed(format!(
                    "{endpoint} body could not be decoded: {}",
                    e.without_url()
                ))
            } else {
                transport_error(endpoint, e)
            }
        })?;

        let elapsed = start_time.elapsed();
        info!(
            "Retrieved {} in {:.3}s",
            endpoint,
            elapsed.as_secs_f64()
        );
        if elapsed.as_secs() > 5 {
            warn!("Slow provider response: {:.3}s", elapsed.as_secs_f64());
        }

        Ok(body)
    }
}

/// Map a transport failure to `ProviderUnreachable`, keeping the API key out of the message
fn transport_error(endpoint: &str, error: reqwest::Error) -> ReportError {
    let error = error.without_url();
    if error.is_timeout() {
        warn!("Request to {} timed out", endpoint);
        ReportError::unreachable(format!("{endpoint} timed out"))
    } else {
        warn!("Request to {} failed: {}", endpoint, error);
        ReportError::unreachable(format!("{endpoint} request failed: {error}"))
    }
}

#[async_trait]
impl EnvironmentProvider for OpenWeatherClient {
    async fn air_pollution(
        &self,
        coordinate: Coordinate,
    ) -> Result<AirPollutionResponse, ReportError> {
        self.fetch("air_pollution", coordinate, &[]).await
    }

    async fn current_weather(
        &self,
        coordinate: Coordinate,
    ) -> Result<CurrentWeatherResponse, ReportError> {
        self.fetch("weather", coordinate, &[("units", "metric")])
            .await
    }
}
