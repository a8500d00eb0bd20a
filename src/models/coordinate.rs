//! Coordinate model for the location a report is built for

use crate::AirwatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic coordinate in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, AirwatchError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AirwatchError::validation(format!(
                "Latitude must be between -90 and 90, got: {latitude}"
            )));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AirwatchError::validation(format!(
                "Longitude must be between -180 and 180, got: {longitude}"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate the caller has already range-checked
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format coordinate as a short string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_coordinates())
    }
}

/// Parse coordinates from strings like "19.0760,72.8777" or "19.0760 72.8777"
impl FromStr for Coordinate {
    type Err = AirwatchError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(AirwatchError::validation(
                "Coordinates must be in format 'lat,lon'",
            ));
        }

        let lat = parts[0]
            .parse::<f64>()
            .map_err(|_| AirwatchError::validation(format!("Invalid latitude: {}", parts[0])))?;
        let lon = parts[1]
            .parse::<f64>()
            .map_err(|_| AirwatchError::validation(format!("Invalid longitude: {}", parts[1])))?;

        Self::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_in_range() {
        let coordinate = Coordinate::new(19.0760, 72.8777).unwrap();
        assert_eq!(coordinate.latitude, 19.0760);
        assert_eq!(coordinate.longitude, 72.8777);
        assert_eq!(coordinate.to_string(), "19.0760, 72.8777");
    }

    #[test]
    fn test_coordinate_bounds_are_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_coordinate_out_of_range() {
        let err = Coordinate::new(91.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("Latitude"));

        let err = Coordinate::new(0.0, -180.5).unwrap_err();
        assert!(err.to_string().contains("Longitude"));

        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_coordinate_parsing() {
        let parsed: Coordinate = "46.8182,8.2275".parse().unwrap();
        assert_eq!(parsed, Coordinate::new_unchecked(46.8182, 8.2275));

        let parsed: Coordinate = "-46.8182 -8.2275".parse().unwrap();
        assert_eq!(parsed, Coordinate::new_unchecked(-46.8182, -8.2275));

        assert!("46.8182".parse::<Coordinate>().is_err());
        assert!("abc,8.2".parse::<Coordinate>().is_err());
        assert!("95.0,8.2".parse::<Coordinate>().is_err());
    }
}
