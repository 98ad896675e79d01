//! WebAssembly module for the Crop Advisor forms
//!
//! Provides client-side:
//! - Form validation on every field change
//! - Select options for the yield form
//! - Result statement formatting

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Validate the yield form. Returns a JSON object of field errors, empty
/// when the form may be submitted.
#[wasm_bindgen]
pub fn validate_yield_fields(fields_json: &str) -> Result<String, JsValue> {
    let fields: YieldFormFields = serde_json::from_str(fields_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid yield form JSON: {}", e)))?;
    errors_json(validate_yield_form(&fields).err())
}

/// Validate the crop recommendation form
#[wasm_bindgen]
pub fn validate_recommendation_fields(fields_json: &str) -> Result<String, JsValue> {
    let fields: RecommendationFormFields = serde_json::from_str(fields_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid recommendation form JSON: {}", e)))?;
    errors_json(validate_recommendation_form(&fields).err())
}

fn errors_json(errors: Option<FieldErrors>) -> Result<String, JsValue> {
    serde_json::to_string(&errors.unwrap_or_default())
        .map_err(|e| JsValue::from_str(&format!("Failed to encode errors: {}", e)))
}

/// Validate a single integer field as it is typed
#[wasm_bindgen]
pub fn integer_field_error(value: &str) -> Option<String> {
    parse_non_negative_integer(value).err().map(str::to_string)
}

/// Validate the pH field as it is typed
#[wasm_bindgen]
pub fn ph_field_error(value: &str) -> Option<String> {
    parse_ph_value(value).err().map(str::to_string)
}

/// Select options for the yield form, as JSON
#[wasm_bindgen]
pub fn form_options() -> String {
    serde_json::to_string(&FormOptions::default()).unwrap_or_default()
}

/// Format a yield (tons per hectare) for display
#[wasm_bindgen]
pub fn yield_statement(yield_tons_per_hectare: f64) -> String {
    format_yield_statement(yield_tons_per_hectare)
}

/// Format recommended crops for display
#[wasm_bindgen]
pub fn recommendation_statement(crops: Vec<String>) -> String {
    format_recommendation_statement(&crops)
}
