//! Report construction
//!
//! Turns the two raw provider readings for a coordinate into an
//! [`EnvironmentalReport`]. Any missing datum aborts the build with a typed
//! [`ReportError`]; the only tolerated gap is the location name, which
//! degrades to [`LOCATION_NOT_FOUND`].

use chrono::{DateTime, Utc};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use super::ReportError;
use super::trend::simulated_trend;
use crate::models::{
    AqiIndex, AqiLevel, Coordinate, EnvironmentalReport, LOCATION_NOT_FOUND, PollutantReadings,
    WeatherSnapshot,
};
use crate::provider::{AirPollutionResponse, CurrentWeatherResponse, EnvironmentProvider};

/// Builds environmental reports from an [`EnvironmentProvider`]
#[derive(Debug, Clone)]
pub struct ReportBuilder<P> {
    provider: P,
}

impl<P: EnvironmentProvider> ReportBuilder<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build a report for a coordinate.
    ///
    /// The coordinate is not range-checked here; callers validate with
    /// [`Coordinate::new`]. Both provider reads are issued concurrently and
    /// neither is retried. Pollution failures take precedence over weather
    /// failures so the reported error does not depend on timing.
    #[instrument(skip(self), fields(lat = coordinate.latitude, lon = coordinate.longitude))]
    pub async fn build_report(
        &self,
        coordinate: Coordinate,
    ) -> Result<EnvironmentalReport, ReportError> {
        let start_time = Instant::now();
        info!("Building environmental report for {}", coordinate);

        let (pollution, weather) = tokio::join!(
            self.provider.air_pollution(coordinate),
            self.provider.current_weather(coordinate)
        );

        let air_quality = extract_air_quality(pollution?)?;
        let weather = extract_weather(weather?)?;

        let report = EnvironmentalReport {
            coordinate,
            aqi: air_quality.aqi,
            level: air_quality.level,
            pollutants: air_quality.pollutants,
            weather,
            trend: simulated_trend(air_quality.aqi),
            observed_at: air_quality.observed_at,
        };

        info!(
            "Built report in {:.3}s: AQI {} ({})",
            start_time.elapsed().as_secs_f64(),
            report.aqi,
            report.aqi_label()
        );
        Ok(report)
    }
}

struct AirQuality {
    aqi: AqiIndex,
    level: AqiLevel,
    pollutants: PollutantReadings,
    observed_at: Option<DateTime<Utc>>,
}

fn extract_air_quality(response: AirPollutionResponse) -> Result<AirQuality, ReportError> {
    let reading = response
        .list
        .and_then(|list| list.into_iter().next())
        .ok_or_else(|| {
            warn!("Provider returned no pollution readings");
            ReportError::NoDataAvailable
        })?;

    let components = reading
        .components
        .ok_or_else(|| ReportError::malformed("pollution reading has no components"))?;

    let pollutants = PollutantReadings::try_from_lookup(|pollutant| {
        components.get(pollutant.key()).copied()
    })
    .map_err(|missing| {
        ReportError::malformed(format!("missing pollutant '{}'", missing.key()))
    })?;

    if let Some((pollutant, value)) = pollutants
        .iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
    {
        return Err(ReportError::malformed(format!(
            "pollutant '{}' concentration {value} out of range",
            pollutant.key()
        )));
    }

    let raw_aqi = reading
        .main
        .and_then(|main| main.aqi)
        .ok_or_else(|| ReportError::malformed("pollution reading has no AQI index"))?;

    let level = AqiLevel::lookup(raw_aqi).inspect_err(|_| {
        warn!("Provider returned AQI {} outside the 1-5 scale", raw_aqi);
    })?;

    let observed_at = reading
        .dt
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0));

    debug!("Air quality: AQI {} with {:?}", raw_aqi, pollutants);

    Ok(AirQuality {
        aqi: level.index(),
        level,
        pollutants,
        observed_at,
    })
}

fn extract_weather(response: CurrentWeatherResponse) -> Result<WeatherSnapshot, ReportError> {
    let name = response.name.filter(|name| !name.trim().is_empty());
    let country = response
        .sys
        .and_then(|sys| sys.country)
        .filter(|country| !country.trim().is_empty());

    let (location_name, country_code) = match (name, country) {
        (Some(name), Some(country)) => (name, country),
        _ => {
            debug!("Provider did not name the location, using placeholder");
            (LOCATION_NOT_FOUND.to_string(), LOCATION_NOT_FOUND.to_string())
        }
    };

    let main = response
        .main
        .ok_or_else(|| ReportError::malformed("weather response has no 'main' section"))?;
    let temperature_c = main
        .temp
        .ok_or_else(|| ReportError::malformed("weather response has no temperature"))?;
    let humidity_pct = main
        .humidity
        .ok_or_else(|| ReportError::malformed("weather response has no humidity"))?;
    let wind_speed_ms = response
        .wind
        .and_then(|wind| wind.speed)
        .ok_or_else(|| ReportError::malformed("weather response has no wind speed"))?;
    let condition_text = response
        .weather
        .and_then(|conditions| conditions.into_iter().next())
        .and_then(|condition| condition.description)
        .ok_or_else(|| ReportError::malformed("weather response has no condition description"))?;

    if !(0.0..=100.0).contains(&humidity_pct) {
        return Err(ReportError::malformed(format!(
            "humidity {humidity_pct}% out of range"
        )));
    }
    if !wind_speed_ms.is_finite() || wind_speed_ms < 0.0 {
        return Err(ReportError::malformed(format!(
            "wind speed {wind_speed_ms} m/s out of range"
        )));
    }

    Ok(WeatherSnapshot {
        location_name,
        country_code,
        temperature_c,
        humidity_pct,
        wind_speed_ms,
        condition_text,
    })
}
