//! Environmental report construction
//!
//! - builder: fetches readings and assembles the report
//! - error: failure taxonomy
//! - trend: synthetic AQI trend line

pub mod builder;
pub mod error;
pub mod trend;

pub use builder::ReportBuilder;
pub use error::ReportError;
pub use trend::{TREND_LABELS, simulated_trend};
