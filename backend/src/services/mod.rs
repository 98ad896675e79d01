//! Submission workflows

pub mod crop_recommendation;
pub mod submission;
pub mod yield_prediction;

pub use crop_recommendation::{RecommendationWorkflow, RECOMMENDATION_ERROR_MESSAGE};
pub use submission::SubmissionTracker;
pub use yield_prediction::{YieldWorkflow, YIELD_ERROR_MESSAGE};
