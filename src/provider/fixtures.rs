//! Canned provider payloads and an in-memory provider for tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};

use super::{AirPollutionResponse, CurrentWeatherResponse, EnvironmentProvider};
use crate::models::Coordinate;
use crate::report::ReportError;

pub fn pollution_json(aqi: i64) -> Value {
    json!({
        "coord": {"lon": 72.8777, "lat": 19.076},
        "list": [{
            "main": {"aqi": aqi},
            "components": {
                "co": 620.84, "no": 0.1, "no2": 18.51, "o3": 41.13,
                "so2": 9.42, "pm2_5": 61.37, "pm10": 97.19, "nh3": 5.38
            },
            "dt": 1_700_000_000
        }]
    })
}

pub fn weather_json() -> Value {
    json!({
        "coord": {"lon": 72.8777, "lat": 19.076},
        "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds"}],
        "main": {"temp": 29.94, "feels_like": 34.1, "humidity": 74, "pressure": 1010},
        "wind": {"speed": 3.6, "deg": 270},
        "sys": {"country": "IN"},
        "name": "Mumbai",
        "dt": 1_700_000_000
    })
}

/// Provider answering every call with fixed results
pub struct FakeProvider {
    pub pollution: Result<AirPollutionResponse, ReportError>,
    pub weather: Result<CurrentWeatherResponse, ReportError>,
    pub calls: AtomicUsize,
}

impl FakeProvider {
    pub fn from_json(pollution: Value, weather: Value) -> Self {
        Self {
            pollution: Ok(serde_json::from_value(pollution).expect("pollution fixture")),
            weather: Ok(serde_json::from_value(weather).expect("weather fixture")),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn healthy(aqi: i64) -> Self {
        Self::from_json(pollution_json(aqi), weather_json())
    }
}

#[async_trait]
impl EnvironmentProvider for FakeProvider {
    async fn air_pollution(
        &self,
        _coordinate: Coordinate,
    ) -> Result<AirPollutionResponse, ReportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pollution.clone()
    }

    async fn current_weather(
        &self,
        _coordinate: Coordinate,
    ) -> Result<CurrentWeatherResponse, ReportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.weather.clone()
    }
}
