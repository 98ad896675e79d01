//! Submission state shared by both form workflows

use serde::{Deserialize, Serialize};

/// What the presentation layer renders for one form
///
/// At most one of `error` / `result` is ever set, and neither is set while
/// loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub result: Option<String>,
}

/// Workflow lifecycle, derived from [`SubmissionState`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPhase {
    Idle,
    Loading,
    Success,
    Failed,
}

impl SubmissionState {
    /// State at the start of a submission: previous outcome cleared
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            error: None,
            result: None,
        }
    }

    pub fn succeeded(result: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            error: None,
            result: Some(result.into()),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            error: Some(error.into()),
            result: None,
        }
    }

    pub fn phase(&self) -> WorkflowPhase {
        match (self.is_loading, &self.error, &self.result) {
            (true, _, _) => WorkflowPhase::Loading,
            (false, Some(_), _) => WorkflowPhase::Failed,
            (false, None, Some(_)) => WorkflowPhase::Success,
            (false, None, None) => WorkflowPhase::Idle,
        }
    }
}
