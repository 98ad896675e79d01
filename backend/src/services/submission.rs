//! Submission state tracking shared by both workflows

use std::future::Future;
use std::sync::Arc;

use shared::SubmissionState;
use tokio::sync::Mutex;

use crate::error::AppError;

/// Holds one workflow's [`SubmissionState`]
///
/// Checking for an in-flight submission and entering Loading happen under the
/// same lock, so two overlapping submits cannot both start.
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    state: Mutex<SubmissionState>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub async fn snapshot(&self) -> SubmissionState {
        self.state.lock().await.clone()
    }

    /// Enter Loading, clearing the previous outcome. Returns `false` and leaves
    /// the state untouched if a submission is already in flight.
    pub async fn begin(&self) -> bool {
        let mut state = self.state.lock().await;
        if state.is_loading {
            return false;
        }
        *state = SubmissionState::loading();
        true
    }

    /// Record the outcome of the in-flight submission
    pub async fn finish(&self, outcome: SubmissionState) -> SubmissionState {
        let mut state = self.state.lock().await;
        *state = outcome;
        state.clone()
    }

    /// Drive an already-begun submission to its outcome on a separate task.
    ///
    /// The outcome is recorded even if the caller stops waiting, so an
    /// abandoned request still leaves the workflow out of Loading. If the task
    /// itself dies, `failure_message` is recorded instead.
    pub async fn resolve<F>(
        self: &Arc<Self>,
        failure_message: &'static str,
        submission: F,
    ) -> SubmissionState
    where
        F: Future<Output = SubmissionState> + Send + 'static,
    {
        let tracker = Arc::clone(self);
        let task = tokio::spawn(async move {
            let outcome = submission.await;
            tracker.finish(outcome).await
        });

        match task.await {
            Ok(state) => state,
            Err(e) => {
                let err = AppError::Internal(format!("Submission task failed: {}", e));
                tracing::error!(error = %err, "Submission did not complete");
                self.finish(SubmissionState::failed(failure_message)).await
            }
        }
    }
}
