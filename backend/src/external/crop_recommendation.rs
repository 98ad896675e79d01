//! Crop Recommendation Client
//!
//! Client for the external crop-recommendation service. Requests carry a
//! bearer token from configuration.

use reqwest::Client;
use serde::Deserialize;
use shared::CropRecommendationRequest;

use crate::config::RecommendationConfig;
use crate::error::{AppError, AppResult};

/// Client for the crop recommendation service
#[derive(Clone)]
pub struct CropRecommendationClient {
    endpoint: String,
    api_token: String,
    http_client: Client,
}

#[derive(Debug, Deserialize)]
struct RecommendCropsResponse {
    crops: Vec<String>,
}

/// Error body the service may send with a non-success status
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

impl CropRecommendationClient {
    pub fn new(config: &RecommendationConfig) -> AppResult<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(AppError::Configuration(
                "recommendation.endpoint must be set".to_string(),
            ));
        }
        if config.api_token.trim().is_empty() {
            return Err(AppError::Configuration(
                "recommendation.api_token must be set".to_string(),
            ));
        }

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
            http_client: Client::new(),
        })
    }

    /// Ask for crops suited to the given soil. Never returns an empty list.
    pub async fn recommend(&self, request: &CropRecommendationRequest) -> AppResult<Vec<String>> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Recommendation request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(match provider_message(&body) {
                Some(message) => AppError::Provider(message),
                None => AppError::Network(format!(
                    "Recommendation API returned {}: {}",
                    status, body
                )),
            });
        }

        let result: RecommendCropsResponse = response.json().await.map_err(|e| {
            AppError::Parse(format!("Failed to parse recommendation: {}", e))
        })?;

        if result.crops.is_empty() {
            return Err(AppError::Parse(
                "Recommendation contained no crops".to_string(),
            ));
        }

        Ok(result.crops)
    }
}

/// Extract a non-blank `message` from an error body, if there is one
fn provider_message(body: &str) -> Option<String> {
    serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_message_extraction() {
        assert_eq!(
            provider_message(r#"{"message":"Soil too acidic"}"#),
            Some("Soil too acidic".to_string())
        );
        assert_eq!(provider_message(r#"{"message":""}"#), None);
        assert_eq!(provider_message(r#"{"error":"bad"}"#), None);
        assert_eq!(provider_message("<html>502</html>"), None);
        assert_eq!(provider_message(""), None);
    }

    #[test]
    fn test_missing_token_rejected() {
        let config = RecommendationConfig {
            endpoint: "http://localhost:5001/recommend".to_string(),
            api_token: String::new(),
        };
        assert!(matches!(
            CropRecommendationClient::new(&config),
            Err(AppError::Configuration(_))
        ));
    }
}
