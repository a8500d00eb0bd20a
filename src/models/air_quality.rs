//! Air quality model: pollutant concentrations and the provider's AQI scale

use crate::report::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Labels of the five AQI levels, best to worst
pub const AQI_LABELS: [&str; 5] = ["Good", "Fair", "Moderate", "Poor", "Very Poor"];

/// Display colors of the five AQI levels, best to worst
pub const AQI_COLORS: [&str; 5] = ["#009966", "#FFDE33", "#FF9933", "#CC0033", "#660099"];

/// Pollutants reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Pm25,
    Pm10,
    Co,
    So2,
    No2,
    O3,
}

impl Pollutant {
    /// All pollutants in display order
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::Co,
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::O3,
    ];

    /// Key used by the provider's `components` object
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm2_5",
            Pollutant::Pm10 => "pm10",
            Pollutant::Co => "co",
            Pollutant::So2 => "so2",
            Pollutant::No2 => "no2",
            Pollutant::O3 => "o3",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Co => "CO",
            Pollutant::So2 => "SO₂",
            Pollutant::No2 => "NO₂",
            Pollutant::O3 => "O₃",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Concentrations in μg/m³ for each of the six tracked pollutants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantReadings {
    pub pm2_5: f64,
    pub pm10: f64,
    pub co: f64,
    pub so2: f64,
    pub no2: f64,
    pub o3: f64,
}

impl PollutantReadings {
    /// Build readings from a lookup, failing on the first pollutant it cannot supply
    pub fn try_from_lookup<F>(mut lookup: F) -> Result<Self, Pollutant>
    where
        F: FnMut(Pollutant) -> Option<f64>,
    {
        let mut get = |pollutant| lookup(pollutant).ok_or(pollutant);
        Ok(Self {
            pm2_5: get(Pollutant::Pm25)?,
            pm10: get(Pollutant::Pm10)?,
            co: get(Pollutant::Co)?,
            so2: get(Pollutant::So2)?,
            no2: get(Pollutant::No2)?,
            o3: get(Pollutant::O3)?,
        })
    }

    /// Concentration of a single pollutant
    #[must_use]
    pub fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::Co => self.co,
            Pollutant::So2 => self.so2,
            Pollutant::No2 => self.no2,
            Pollutant::O3 => self.o3,
        }
    }

    /// Iterate readings in display order
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// Sum of all concentrations
    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }

    /// Percentage contribution of each pollutant to the total.
    /// All zeros when the total is zero.
    #[must_use]
    pub fn shares(&self) -> Vec<(Pollutant, f64)> {
        let total = self.total();
        self.iter()
            .map(|(pollutant, value)| {
                let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
                (pollutant, share)
            })
            .collect()
    }
}

/// Air Quality Index on the provider's 1 (best) to 5 (worst) scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct AqiIndex(u8);

impl AqiIndex {
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Level this index falls into
    #[must_use]
    pub fn level(self) -> AqiLevel {
        AqiLevel::ALL[usize::from(self.0 - 1)]
    }
}

impl TryFrom<i64> for AqiIndex {
    type Error = ReportError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let level = AqiLevel::lookup(value)?;
        Ok(AqiIndex(level as u8 + 1))
    }
}

impl From<AqiIndex> for u8 {
    fn from(index: AqiIndex) -> Self {
        index.0
    }
}

impl From<AqiIndex> for f64 {
    fn from(index: AqiIndex) -> Self {
        f64::from(index.0)
    }
}

impl fmt::Display for AqiIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named AQI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AqiLevel {
    Good = 0,
    Fair = 1,
    Moderate = 2,
    Poor = 3,
    #[serde(rename = "Very Poor")]
    VeryPoor = 4,
}

impl AqiLevel {
    pub const ALL: [AqiLevel; 5] = [
        AqiLevel::Good,
        AqiLevel::Fair,
        AqiLevel::Moderate,
        AqiLevel::Poor,
        AqiLevel::VeryPoor,
    ];

    /// Bounds-checked lookup of the level at position `aqi - 1`
    pub fn lookup(aqi: i64) -> Result<Self, ReportError> {
        aqi.checked_sub(1)
            .and_then(|position| usize::try_from(position).ok())
            .and_then(|position| Self::ALL.get(position))
            .copied()
            .ok_or(ReportError::InvalidAqi(aqi))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        AQI_LABELS[self as usize]
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        AQI_COLORS[self as usize]
    }

    /// Index value for this level
    #[must_use]
    pub fn index(self) -> AqiIndex {
        AqiIndex(self as u8 + 1)
    }
}

impl fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colored band of the AQI gauge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiScaleBand {
    pub from: f64,
    pub to: f64,
    pub color: &'static str,
}

/// Gauge bands spanning 1..5, one per unit step, colored by the lower level
#[must_use]
pub fn gauge_bands() -> Vec<AqiScaleBand> {
    AqiLevel::ALL[..4]
        .iter()
        .map(|level| {
            let from = f64::from(level.index());
            AqiScaleBand {
                from,
                to: from + 1.0,
                color: level.color(),
            }
        })
        .collect()
}
