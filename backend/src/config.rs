//! Configuration management for the Crop Advisor
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// Yield prediction service configuration
    pub prediction: PredictionConfig,

    /// Crop recommendation service configuration
    pub recommendation: RecommendationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API base URL (OpenWeatherMap compatible)
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,

    /// Unit system passed to the provider
    pub units: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionConfig {
    /// Yield prediction endpoint. No default.
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecommendationConfig {
    /// Crop recommendation endpoint
    pub endpoint: String,

    /// Bearer token sent with every recommendation request
    pub api_token: String,
}

pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5";

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("CA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", DEFAULT_WEATHER_ENDPOINT)?
            .set_default("weather.api_key", "")?
            .set_default("weather.units", "metric")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CA_ prefix)
            .add_source(
                Environment::with_prefix("CA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject blank credentials and endpoints before any request is made
    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("weather.api_endpoint", &self.weather.api_endpoint),
            ("weather.api_key", &self.weather.api_key),
            ("prediction.endpoint", &self.prediction.endpoint),
            ("recommendation.endpoint", &self.recommendation.endpoint),
            ("recommendation.api_token", &self.recommendation.api_token),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::Configuration(format!("{} must be set", key)));
            }
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
