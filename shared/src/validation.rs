//! Validation schemas for the yield and recommendation forms
//!
//! Field rules are plain functions so they can be reused by the `validator`
//! derive on the raw field structs, by the wasm bindings, and by tests.

use std::borrow::Cow;
use std::str::FromStr;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::models::{
    Crop, Fertilizer, FormChoice, Irrigation, RecommendationFormFields, RecommendationFormInput,
    Region, SoilType, YieldFormFields, YieldFormInput,
};
use crate::types::FieldErrors;

/// Upper bound of the pH scale
pub const PH_MAX: u32 = 14;

// ============================================================================
// Field Rules
// ============================================================================

/// Parse a non-negative whole number. Only ASCII digits are accepted.
pub fn parse_non_negative_integer(value: &str) -> Result<u32, &'static str> {
    if value.is_empty() {
        return Err("This field is required");
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("Must be a whole number of 0 or more");
    }
    value.parse::<u32>().map_err(|_| "Value is too large")
}

/// Parse a pH value: digits with an optional fractional part, within 0-14
pub fn parse_ph_value(value: &str) -> Result<Decimal, &'static str> {
    if value.is_empty() {
        return Err("pH value is required");
    }
    if !is_decimal(value) {
        return Err("pH must be a decimal number");
    }
    let ph = Decimal::from_str(value).map_err(|_| "pH must be a decimal number")?;
    if ph < Decimal::ZERO || ph > Decimal::from(PH_MAX) {
        return Err("pH must be between 0 and 14");
    }
    Ok(ph)
}

/// `^[0-9]+(\.[0-9]+)?$`
fn is_decimal(value: &str) -> bool {
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

/// Parse a select field into one of its options
pub fn parse_choice<T: FormChoice>(value: &str, label: &str) -> Result<T, String> {
    if value.is_empty() {
        return Err(format!("{} is required", label));
    }
    T::from_value(value).ok_or_else(|| format!("Select a valid {}", label.to_lowercase()))
}

// ============================================================================
// Schema Hooks (used by `#[validate(custom = ...)]`)
// ============================================================================

fn field_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn choice_rule<T: FormChoice>(value: &str, label: &str) -> Result<(), ValidationError> {
    parse_choice::<T>(value, label)
        .map(|_| ())
        .map_err(|message| field_error("choice", message))
}

pub fn validate_region(value: &str) -> Result<(), ValidationError> {
    choice_rule::<Region>(value, "Region")
}

pub fn validate_soil_type(value: &str) -> Result<(), ValidationError> {
    choice_rule::<SoilType>(value, "Soil type")
}

pub fn validate_crop(value: &str) -> Result<(), ValidationError> {
    choice_rule::<Crop>(value, "Crop")
}

pub fn validate_fertilizer(value: &str) -> Result<(), ValidationError> {
    choice_rule::<Fertilizer>(value, "Fertilizer usage")
}

pub fn validate_irrigation(value: &str) -> Result<(), ValidationError> {
    choice_rule::<Irrigation>(value, "Irrigation usage")
}

pub fn validate_non_negative_integer(value: &str) -> Result<(), ValidationError> {
    parse_non_negative_integer(value)
        .map(|_| ())
        .map_err(|message| field_error("integer", message))
}

pub fn validate_ph_value(value: &str) -> Result<(), ValidationError> {
    parse_ph_value(value)
        .map(|_| ())
        .map_err(|message| field_error("decimal", message))
}

// ============================================================================
// Form Validation
// ============================================================================

/// Validate the yield form, producing the typed input or per-field messages
pub fn validate_yield_form(fields: &YieldFormFields) -> Result<YieldFormInput, FieldErrors> {
    fields.validate().map_err(FieldErrors::from)?;

    Ok(YieldFormInput {
        region: parse_choice(&fields.region, "Region").map_err(|m| FieldErrors::single("region", m))?,
        soil_type: parse_choice(&fields.soil_type, "Soil type")
            .map_err(|m| FieldErrors::single("soilType", m))?,
        crop: parse_choice(&fields.crop, "Crop").map_err(|m| FieldErrors::single("crop", m))?,
        fertilizer: parse_choice(&fields.fertilizer, "Fertilizer usage")
            .map_err(|m| FieldErrors::single("fertilizer", m))?,
        irrigation: parse_choice(&fields.irrigation, "Irrigation usage")
            .map_err(|m| FieldErrors::single("irrigation", m))?,
        days_to_harvest: parse_non_negative_integer(&fields.days_to_harvest)
            .map_err(|m| FieldErrors::single("daysToHarvest", m))?,
    })
}

/// Validate the recommendation form
pub fn validate_recommendation_form(
    fields: &RecommendationFormFields,
) -> Result<RecommendationFormInput, FieldErrors> {
    fields.validate().map_err(FieldErrors::from)?;

    Ok(RecommendationFormInput {
        nitrogen: parse_non_negative_integer(&fields.nitrogen)
            .map_err(|m| FieldErrors::single("nitrogen", m))?,
        phosphorus: parse_non_negative_integer(&fields.phosphorus)
            .map_err(|m| FieldErrors::single("phosphorus", m))?,
        potassium: parse_non_negative_integer(&fields.potassium)
            .map_err(|m| FieldErrors::single("potassium", m))?,
        ph_value: parse_ph_value(&fields.ph_value).map_err(|m| FieldErrors::single("phValue", m))?,
    })
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, kind) in errors.errors() {
            if let ValidationErrorsKind::Field(list) = kind {
                for error in list {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.add(&camel_case(field), message);
                }
            }
        }
        out
    }
}

/// `days_to_harvest` -> `daysToHarvest`
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
