//! Environmental report: the value handed to the rendering layer

use super::{AqiIndex, AqiLevel, Coordinate, PollutantReadings, WeatherSnapshot};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{self, Display};

/// One point of the simulated AQI trend line.
///
/// These points are derived from the current AQI alone; they are not
/// historical measurements and must not be presented as such.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSample {
    /// Relative time label, e.g. "-2 min" or "Now"
    pub label: String,
    pub aqi: f64,
}

/// Air quality and weather for one coordinate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentalReport {
    pub coordinate: Coordinate,
    pub aqi: AqiIndex,
    pub level: AqiLevel,
    pub pollutants: PollutantReadings,
    pub weather: WeatherSnapshot,
    /// Synthetic trend, see [`TrendSample`]
    pub trend: Vec<TrendSample>,
    /// Measurement time reported by the provider for the pollution reading
    pub observed_at: Option<DateTime<Utc>>,
}

impl EnvironmentalReport {
    #[must_use]
    pub fn aqi_label(&self) -> &'static str {
        self.level.label()
    }

    #[must_use]
    pub fn aqi_color(&self) -> &'static str {
        self.level.color()
    }
}

impl Display for EnvironmentalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📍 {}", self.weather.location_label())?;
        writeln!(f, "   🧭 {}", self.coordinate)?;
        if let Some(observed_at) = self.observed_at {
            writeln!(f, "   🕒 Observed {}", observed_at.format("%Y-%m-%d %H:%M UTC"))?;
        }
        writeln!(f)?;

        writeln!(f, "🌡️  Temperature  {}", self.weather.format_temperature())?;
        writeln!(f, "💧 Humidity     {}", self.weather.format_humidity())?;
        writeln!(f, "🌬️  Wind Speed   {}", self.weather.format_wind())?;
        writeln!(f, "☁️  Condition    {}", self.weather.condition_title())?;
        writeln!(f)?;

        writeln!(
            f,
            "🌿 AQI {} - {} ({})",
            self.aqi,
            self.aqi_label(),
            self.aqi_color()
        )?;
        for (pollutant, value) in self.pollutants.iter() {
            writeln!(f, "   {:<6} {:>9.2} μg/m³", pollutant.display_name(), value)?;
        }
        writeln!(f)?;

        writeln!(f, "📊 Simulated AQI trend (not historical)")?;
        for sample in &self.trend {
            writeln!(f, "   {:<7} {:.1}", sample.label, sample.aqi)?;
        }
        Ok(())
    }
}
