//! Configuration management for the `airwatch` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AirwatchError;
use crate::models::Coordinate;
use ::config::{Config, Environment, File, FileFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `airwatch` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AirwatchConfig {
    /// Weather/air quality provider configuration
    pub provider: ProviderConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// HTTP service configuration
    pub server: ServerConfig,
    /// Default dashboard input
    pub defaults: DefaultsConfig,
    /// Styling handed to the rendering layer
    pub theme: ThemeConfig,
}

/// Provider API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// OpenWeatherMap API key
    pub api_key: Option<String>,
    /// Base URL of the provider API
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// HTTP service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Coordinate shown before the user enters one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

/// Page styling constants for the dashboard front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_background_start")]
    pub background_start: String,
    #[serde(default = "default_background_end")]
    pub background_end: String,
    /// Titles, card values and chart fonts
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default = "default_pollutant_label")]
    pub pollutant_label: String,
    #[serde(default = "default_card_background")]
    pub card_background: String,
    #[serde(default = "default_text")]
    pub text: String,
    /// Background of bar and pie charts
    #[serde(default = "default_chart_paper")]
    pub chart_paper: String,
}

// Default value functions
fn default_provider_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_provider_timeout() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_latitude() -> f64 {
    19.0760
}

fn default_longitude() -> f64 {
    72.8777
}

fn default_background_start() -> String {
    "#000000".to_string()
}

fn default_background_end() -> String {
    "#2c3e50".to_string()
}

fn default_accent() -> String {
    "#FFD700".to_string()
}

fn default_pollutant_label() -> String {
    "#FF9933".to_string()
}

fn default_card_background() -> String {
    "#1e1e1e".to_string()
}

fn default_text() -> String {
    "#FFFFFF".to_string()
}

fn default_chart_paper() -> String {
    "#222222".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_provider_base_url(),
            timeout_seconds: default_provider_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_start: default_background_start(),
            background_end: default_background_end(),
            accent: default_accent(),
            pollutant_label: default_pollutant_label(),
            card_background: default_card_background(),
            text: default_text(),
            chart_paper: default_chart_paper(),
        }
    }
}

impl DefaultsConfig {
    /// Default coordinate, range-checked
    pub fn coordinate(&self) -> Result<Coordinate, AirwatchError> {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl AirwatchConfig {
    /// Load configuration from `config_path`, or from the default location when `None`.
    ///
    /// An explicit path must exist; the default location is optional.
    /// Environment variables (`AIRWATCH__PROVIDER__API_KEY`, ...) override both.
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        match config_path {
            Some(path) => {
                builder = builder.add_source(
                    File::from(path)
                        .required(true)
                        .format(FileFormat::Toml),
                );
            }
            None => {
                if let Some(path) = Self::get_config_path().filter(|p| p.exists()) {
                    builder = builder.add_source(
                        File::from(path)
                            .required(false)
                            .format(FileFormat::Toml),
                    );
                }
            }
        }

        // Add environment variable overrides with AIRWATCH__ prefix
        builder = builder.add_source(
            Environment::with_prefix("AIRWATCH")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AirwatchConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("airwatch").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.provider.base_url.is_empty() {
            self.provider.base_url = default_provider_base_url();
        }
        if self.provider.timeout_seconds == 0 {
            self.provider.timeout_seconds = default_provider_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        self.validate_theme()?;
        Ok(())
    }

    /// Validate the provider API key when one is set
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.provider.api_key {
            if api_key.is_empty() {
                return Err(AirwatchError::config(
                    "Provider API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }

            if api_key.len() < 8 {
                return Err(AirwatchError::config(
                    "Provider API key appears to be invalid (too short). Please check your API key.",
                )
                .into());
            }

            if api_key.len() > 100 {
                return Err(AirwatchError::config(
                    "Provider API key appears to be invalid (too long). Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.provider.timeout_seconds > 120 {
            return Err(
                AirwatchError::config("Provider timeout cannot exceed 120 seconds").into(),
            );
        }

        self.defaults.coordinate().map_err(|e| {
            AirwatchError::config(format!("Invalid default coordinate: {}", e.user_message()))
        })?;

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AirwatchError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AirwatchError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.provider.base_url.starts_with("http://")
            && !self.provider.base_url.starts_with("https://")
        {
            return Err(AirwatchError::config(
                "Provider base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }

    /// Validate that every theme entry is a hex color
    fn validate_theme(&self) -> Result<()> {
        let theme = &self.theme;
        let colors = [
            ("background_start", &theme.background_start),
            ("background_end", &theme.background_end),
            ("accent", &theme.accent),
            ("pollutant_label", &theme.pollutant_label),
            ("card_background", &theme.card_background),
            ("text", &theme.text),
            ("chart_paper", &theme.chart_paper),
        ];

        for (name, color) in colors {
            if !is_hex_color(color) {
                return Err(AirwatchError::config(format!(
                    "Theme color '{name}' must be a hex color like #FFD700, got '{color}'"
                ))
                .into());
            }
        }

        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
