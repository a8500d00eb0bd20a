//! Weather snapshot model and display methods

use serde::{Deserialize, Serialize};

/// Shown in place of the location name and country when the provider omits either
pub const LOCATION_NOT_FOUND: &str = "Location not found";

/// Current weather at the report coordinate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Nearest named place, or [`LOCATION_NOT_FOUND`]
    pub location_name: String,
    /// Country code (ISO 3166-1 alpha-2), or [`LOCATION_NOT_FOUND`]
    pub country_code: String,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Relative humidity, 0-100
    pub humidity_pct: f64,
    /// Wind speed in m/s
    pub wind_speed_ms: f64,
    /// Provider's condition description, e.g. "scattered clouds"
    pub condition_text: String,
}

impl WeatherSnapshot {
    /// Whether the provider named the location
    #[must_use]
    pub fn is_location_known(&self) -> bool {
        self.location_name != LOCATION_NOT_FOUND
    }

    /// "City, CC" or the placeholder
    #[must_use]
    pub fn location_label(&self) -> String {
        if self.is_location_known() {
            format!("{}, {}", self.location_name, self.country_code)
        } else {
            LOCATION_NOT_FOUND.to_string()
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature_c)
    }

    /// Format humidity with unit
    #[must_use]
    pub fn format_humidity(&self) -> String {
        format!("{:.0}%", self.humidity_pct)
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.1} m/s", self.wind_speed_ms)
    }

    /// Condition text with each word capitalized
    #[must_use]
    pub fn condition_title(&self) -> String {
        self.condition_text
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
