//! HTTP handlers consumed by the browser forms

pub mod crop_recommendation;
pub mod health;
pub mod options;
pub mod yield_prediction;

pub use crop_recommendation::*;
pub use health::*;
pub use options::*;
pub use yield_prediction::*;

use serde::Serialize;
use shared::FieldErrors;

/// Result of re-running a form's validation schema
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub errors: FieldErrors,
}

impl<T> From<Result<T, FieldErrors>> for ValidationResponse {
    fn from(result: Result<T, FieldErrors>) -> Self {
        let errors = result.err().unwrap_or_default();
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
