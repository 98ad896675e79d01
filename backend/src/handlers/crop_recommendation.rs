//! HTTP handlers for the crop recommendation form

use axum::{extract::State, Json};
use shared::{validate_recommendation_form, RecommendationFormFields, SubmissionState};

use super::ValidationResponse;
use crate::error::AppResult;
use crate::AppState;

pub async fn validate_recommendation_fields(
    Json(fields): Json<RecommendationFormFields>,
) -> Json<ValidationResponse> {
    Json(validate_recommendation_form(&fields).into())
}

/// Validate and submit the soil parameters
pub async fn submit_recommendation_form(
    State(state): State<AppState>,
    Json(fields): Json<RecommendationFormFields>,
) -> AppResult<Json<SubmissionState>> {
    let input = validate_recommendation_form(&fields)?;
    let submission = state.recommendation_workflow.submit(input).await;
    Ok(Json(submission))
}

pub async fn get_recommendation_state(State(state): State<AppState>) -> Json<SubmissionState> {
    Json(state.recommendation_workflow.state().await)
}
