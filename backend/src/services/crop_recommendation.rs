//! Crop recommendation workflow

use std::sync::Arc;

use shared::{
    format_recommendation_statement, CropRecommendationRequest, RecommendationFormInput,
    SubmissionState,
};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::external::CropRecommendationClient;
use crate::services::submission::SubmissionTracker;

/// Shown when the service gives no message of its own
pub const RECOMMENDATION_ERROR_MESSAGE: &str =
    "Unable to recommend crops right now. Please try again.";

/// Recommendation workflow with its own submission state
pub struct RecommendationWorkflow {
    client: CropRecommendationClient,
    tracker: Arc<SubmissionTracker>,
}

impl RecommendationWorkflow {
    pub fn new(client: CropRecommendationClient) -> Self {
        Self {
            client,
            tracker: Arc::new(SubmissionTracker::new()),
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(CropRecommendationClient::new(
            &config.recommendation,
        )?))
    }

    pub async fn state(&self) -> SubmissionState {
        self.tracker.snapshot().await
    }

    /// Run one submission to completion and return the resulting state.
    ///
    /// If a submission is already loading, nothing is sent and the current
    /// (loading) state is returned. Once started, a submission resolves even
    /// if the caller stops waiting for it.
    pub async fn submit(&self, input: RecommendationFormInput) -> SubmissionState {
        if !self.tracker.begin().await {
            tracing::warn!("Recommendation submission ignored: previous submission still loading");
            return self.tracker.snapshot().await;
        }

        let client = self.client.clone();
        let request = CropRecommendationRequest::from(input);
        self.tracker
            .resolve(RECOMMENDATION_ERROR_MESSAGE, async move {
                match client.recommend(&request).await {
                    Ok(crops) => {
                        tracing::info!(count = crops.len(), "Crops recommended");
                        SubmissionState::succeeded(format_recommendation_statement(&crops))
                    }
                    Err(AppError::Provider(message)) => {
                        tracing::warn!(%message, "Recommendation service rejected request");
                        SubmissionState::failed(message)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Crop recommendation failed");
                        SubmissionState::failed(RECOMMENDATION_ERROR_MESSAGE)
                    }
                }
            })
            .await
    }
}
