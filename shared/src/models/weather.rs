//! Weather data models

use serde::{Deserialize, Serialize};

/// Current conditions for a region, fetched once per yield submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temperature_celsius: f64,
    /// 0 when the provider reports no rain
    pub precipitation_mm: f64,
    pub humidity_percent: f64,
}
