//! Simulated AQI trend.
//!
//! The provider only returns the current reading, so the trend line is
//! synthesized from it: `[aqi-1, aqi-0.5, aqi, aqi+0.5, aqi]`. Nothing here is
//! fetched or stored, and the points carry no historical meaning.

use crate::models::{AqiIndex, TrendSample};

/// Relative time labels of the trend points, oldest first
pub const TREND_LABELS: [&str; 5] = ["-4 min", "-3 min", "-2 min", "-1 min", "Now"];

const TREND_OFFSETS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 0.0];

/// Build the five synthetic trend points for an AQI index
#[must_use]
pub fn simulated_trend(aqi: AqiIndex) -> Vec<TrendSample> {
    let current = f64::from(aqi);
    TREND_LABELS
        .iter()
        .zip(TREND_OFFSETS)
        .map(|(label, offset)| TrendSample {
            label: (*label).to_string(),
            aqi: current + offset,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_for_moderate() {
        let trend = simulated_trend(AqiIndex::try_from(3).unwrap());

        let values: Vec<f64> = trend.iter().map(|s| s.aqi).collect();
        assert_eq!(values, [2.0, 2.5, 3.0, 3.5, 3.0]);

        let labels: Vec<&str> = trend.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, TREND_LABELS);
    }

    #[test]
    fn test_trend_ends_at_current() {
        for aqi in 1..=5 {
            let trend = simulated_trend(AqiIndex::try_from(aqi).unwrap());
            assert_eq!(trend.len(), 5);
            assert_eq!(trend[4].aqi, aqi as f64);
            assert_eq!(trend[0].aqi, aqi as f64 - 1.0);
        }
    }
}
