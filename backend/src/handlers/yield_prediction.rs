//! HTTP handlers for the yield form

use axum::{extract::State, Json};
use shared::{validate_yield_form, SubmissionState, YieldFormFields};

use super::ValidationResponse;
use crate::error::AppResult;
use crate::AppState;

/// Re-run the yield schema on the current field values
pub async fn validate_yield_fields(Json(fields): Json<YieldFormFields>) -> Json<ValidationResponse> {
    Json(validate_yield_form(&fields).into())
}

/// Validate and submit the yield form. Invalid fields never reach the workflow.
pub async fn submit_yield_form(
    State(state): State<AppState>,
    Json(fields): Json<YieldFormFields>,
) -> AppResult<Json<SubmissionState>> {
    let input = validate_yield_form(&fields)?;
    let submission = state.yield_workflow.submit(input).await;
    Ok(Json(submission))
}

/// Current yield submission state
pub async fn get_yield_state(State(state): State<AppState>) -> Json<SubmissionState> {
    Json(state.yield_workflow.state().await)
}
