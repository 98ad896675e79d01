//! Weather API client for fetching current conditions by region
//!
//! Integrates with the OpenWeatherMap current weather API

use reqwest::Client;
use serde::Deserialize;
use shared::WeatherSnapshot;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    units: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    main: OWMMain,
    rain: Option<OWMRain>,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient. A blank API key is rejected here so that
    /// no request is ever sent without a credential.
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::Configuration(
                "weather.api_key must be set".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
            units: config.units.clone(),
        })
    }

    /// Fetch current conditions for a region name
    pub async fn current_conditions(&self, region: &str) -> AppResult<WeatherSnapshot> {
        let url = format!("{}/weather", self.base_url);
        tracing::debug!(region, "Looking up current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", region),
                ("units", self.units.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Network(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OWMCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse weather response: {}", e)))?;

        Ok(convert_current_response(data))
    }
}

/// Convert OpenWeatherMap current response to a snapshot
fn convert_current_response(data: OWMCurrentResponse) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_celsius: data.main.temp,
        precipitation_mm: data.rain.and_then(|r| r.one_hour).unwrap_or(0.0),
        humidity_percent: data.main.humidity,
    }
}
