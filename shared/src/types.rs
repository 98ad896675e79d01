//! Common types used across the platform

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Crop, Fertilizer, FormChoice, Irrigation, Region, SoilType};

/// Per-field validation messages, keyed by the form's camelCase field name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Errors for a single field
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one error
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// One option of a select input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn all<T: FormChoice>() -> Vec<Self> {
        T::ALL
            .iter()
            .map(|c| SelectOption {
                value: c.as_str().to_string(),
                label: c.label().to_string(),
            })
            .collect()
    }
}

/// Select options for every enumerated field of the yield form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub region: Vec<SelectOption>,
    pub soil_type: Vec<SelectOption>,
    pub crop: Vec<SelectOption>,
    pub fertilizer: Vec<SelectOption>,
    pub irrigation: Vec<SelectOption>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            region: SelectOption::all::<Region>(),
            soil_type: SelectOption::all::<SoilType>(),
            crop: SelectOption::all::<Crop>(),
            fertilizer: SelectOption::all::<Fertilizer>(),
            irrigation: SelectOption::all::<Irrigation>(),
        }
    }
}
