//! Yield Prediction Client
//!
//! Client for the external yield-prediction service.

use reqwest::Client;
use serde::Deserialize;
use shared::YieldPredictionRequest;

use crate::config::PredictionConfig;
use crate::error::{AppError, AppResult};

/// Client for the yield prediction service
#[derive(Clone)]
pub struct YieldPredictionClient {
    endpoint: String,
    http_client: Client,
}

/// Response from the prediction service
#[derive(Debug, Deserialize)]
struct PredictYieldResponse {
    #[serde(rename = "yield")]
    yield_tons_per_hectare: f64,
}

impl YieldPredictionClient {
    pub fn new(config: &PredictionConfig) -> AppResult<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(AppError::Configuration(
                "prediction.endpoint must be set".to_string(),
            ));
        }

        Ok(Self {
            endpoint: config.endpoint.clone(),
            http_client: Client::new(),
        })
    }

    /// Request a yield prediction, in tons per hectare
    pub async fn predict(&self, request: &YieldPredictionRequest) -> AppResult<f64> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Prediction request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Network(format!(
                "Prediction API returned {}: {}",
                status, body
            )));
        }

        let result: PredictYieldResponse = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse prediction: {}", e)))?;

        Ok(result.yield_tons_per_hectare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_endpoint_rejected() {
        let config = PredictionConfig {
            endpoint: " ".to_string(),
        };
        assert!(matches!(
            YieldPredictionClient::new(&config),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn test_response_requires_numeric_yield() {
        assert!(serde_json::from_str::<PredictYieldResponse>(r#"{"yield": 3.75}"#).is_ok());
        assert!(serde_json::from_str::<PredictYieldResponse>(r#"{"yield": "high"}"#).is_err());
        assert!(serde_json::from_str::<PredictYieldResponse>(r#"{"prediction": 3}"#).is_err());
    }
}
