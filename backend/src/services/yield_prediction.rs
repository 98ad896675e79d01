//! Yield submission workflow
//!
//! Looks up the weather for the submitted region, merges it into the
//! prediction payload and asks the prediction service for a yield.

use std::sync::Arc;

use shared::{
    format_yield_statement, FormChoice, SubmissionState, YieldFormInput, YieldPredictionRequest,
};

use crate::config::Config;
use crate::error::AppResult;
use crate::external::{WeatherClient, YieldPredictionClient};
use crate::services::submission::SubmissionTracker;

/// Shown for every yield failure; the cause is only logged
pub const YIELD_ERROR_MESSAGE: &str = "Unable to predict yield right now. Please try again.";

/// Yield workflow with its own submission state
pub struct YieldWorkflow {
    weather: WeatherClient,
    prediction: YieldPredictionClient,
    tracker: Arc<SubmissionTracker>,
}

impl YieldWorkflow {
    pub fn new(weather: WeatherClient, prediction: YieldPredictionClient) -> Self {
        Self {
            weather,
            prediction,
            tracker: Arc::new(SubmissionTracker::new()),
        }
    }

    /// Build the workflow and its clients from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(
            WeatherClient::new(&config.weather)?,
            YieldPredictionClient::new(&config.prediction)?,
        ))
    }

    /// Current submission state
    pub async fn state(&self) -> SubmissionState {
        self.tracker.snapshot().await
    }

    /// Run one submission to completion and return the resulting state.
    ///
    /// If a submission is already loading, nothing is sent and the current
    /// (loading) state is returned. Once started, a submission resolves even
    /// if the caller stops waiting for it.
    pub async fn submit(&self, input: YieldFormInput) -> SubmissionState {
        if !self.tracker.begin().await {
            tracing::warn!("Yield submission ignored: previous submission still loading");
            return self.tracker.snapshot().await;
        }

        let weather = self.weather.clone();
        let prediction = self.prediction.clone();
        self.tracker
            .resolve(YIELD_ERROR_MESSAGE, async move {
                match predict(&weather, &prediction, &input).await {
                    Ok(yield_value) => {
                        tracing::info!(region = %input.region, crop = %input.crop, yield_value, "Yield predicted");
                        SubmissionState::succeeded(format_yield_statement(yield_value))
                    }
                    Err(e) => {
                        tracing::error!(region = %input.region, error = %e, "Yield prediction failed");
                        SubmissionState::failed(YIELD_ERROR_MESSAGE)
                    }
                }
            })
            .await
    }
}

async fn predict(
    weather: &WeatherClient,
    prediction: &YieldPredictionClient,
    input: &YieldFormInput,
) -> AppResult<f64> {
    let conditions = weather.current_conditions(input.region.as_str()).await?;
    let request = YieldPredictionRequest::new(input, &conditions);
    prediction.predict(&request).await
}
