//! Form models for the yield and recommendation forms
//!
//! Raw field structs carry exactly what the browser submits. Typed inputs are
//! only produced by [`crate::validation`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::validation::{
    validate_crop, validate_fertilizer, validate_irrigation, validate_non_negative_integer,
    validate_ph_value, validate_region, validate_soil_type,
};

/// A select-style field with a closed set of options
pub trait FormChoice: Sized + Copy + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];

    /// Value as submitted by the form and sent to services
    fn as_str(&self) -> &'static str;

    /// Human-readable option label
    fn label(&self) -> &'static str;

    /// Look up an option by its submitted value (exact match)
    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

/// Error returned when a string is not one of a choice's options
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown option: {0}")]
pub struct UnknownOption(pub String);

/// Coarse geographic zone, also the weather lookup key
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl FormChoice for Region {
    const ALL: &'static [Self] = &[Region::North, Region::South, Region::East, Region::West];

    fn as_str(&self) -> &'static str {
        match self {
            Region::North => "north",
            Region::South => "south",
            Region::East => "east",
            Region::West => "west",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Loam,
    Sandy,
    Silt,
}

impl FormChoice for SoilType {
    const ALL: &'static [Self] = &[SoilType::Clay, SoilType::Loam, SoilType::Sandy, SoilType::Silt];

    fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Loam => "loam",
            SoilType::Sandy => "sandy",
            SoilType::Silt => "silt",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Loam => "Loam",
            SoilType::Sandy => "Sandy",
            SoilType::Silt => "Silt",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Wheat,
    Rice,
    Corn,
    Soybean,
}

impl FormChoice for Crop {
    const ALL: &'static [Self] = &[Crop::Wheat, Crop::Rice, Crop::Corn, Crop::Soybean];

    fn as_str(&self) -> &'static str {
        match self {
            Crop::Wheat => "wheat",
            Crop::Rice => "rice",
            Crop::Corn => "corn",
            Crop::Soybean => "soybean",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
            Crop::Corn => "Corn",
            Crop::Soybean => "Soybean",
        }
    }
}

/// Fertilizer usage intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Fertilizer {
    Low,
    Medium,
    High,
}

impl FormChoice for Fertilizer {
    const ALL: &'static [Self] = &[Fertilizer::Low, Fertilizer::Medium, Fertilizer::High];

    fn as_str(&self) -> &'static str {
        match self {
            Fertilizer::Low => "low",
            Fertilizer::Medium => "medium",
            Fertilizer::High => "high",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Fertilizer::Low => "Low",
            Fertilizer::Medium => "Medium",
            Fertilizer::High => "High",
        }
    }
}

/// Whether the field is irrigated. Submitted as "Yes" / "No".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Irrigation {
    Yes,
    No,
}

impl FormChoice for Irrigation {
    const ALL: &'static [Self] = &[Irrigation::Yes, Irrigation::No];

    fn as_str(&self) -> &'static str {
        match self {
            Irrigation::Yes => "Yes",
            Irrigation::No => "No",
        }
    }

    fn label(&self) -> &'static str {
        self.as_str()
    }
}

macro_rules! impl_choice_traits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = UnknownOption;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as FormChoice>::from_value(s).ok_or_else(|| UnknownOption(s.to_string()))
                }
            }
        )*
    };
}

impl_choice_traits!(Region, SoilType, Crop, Fertilizer, Irrigation);

/// Yield form fields exactly as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct YieldFormFields {
    #[validate(custom = "validate_region")]
    pub region: String,
    #[validate(custom = "validate_soil_type")]
    pub soil_type: String,
    #[validate(custom = "validate_crop")]
    pub crop: String,
    #[validate(custom = "validate_fertilizer")]
    pub fertilizer: String,
    #[validate(custom = "validate_irrigation")]
    pub irrigation: String,
    #[validate(custom = "validate_non_negative_integer")]
    pub days_to_harvest: String,
}

/// Validated yield form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct YieldFormInput {
    pub region: Region,
    pub soil_type: SoilType,
    pub crop: Crop,
    pub fertilizer: Fertilizer,
    pub irrigation: Irrigation,
    pub days_to_harvest: u32,
}

/// Recommendation form fields exactly as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationFormFields {
    #[validate(custom = "validate_non_negative_integer")]
    pub nitrogen: String,
    #[validate(custom = "validate_non_negative_integer")]
    pub phosphorus: String,
    #[validate(custom = "validate_non_negative_integer")]
    pub potassium: String,
    #[validate(custom = "validate_ph_value")]
    pub ph_value: String,
}

/// Validated soil parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationFormInput {
    pub nitrogen: u32,
    pub phosphorus: u32,
    pub potassium: u32,
    pub ph_value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_round_trip_values() {
        assert_eq!("north".parse::<Region>().unwrap(), Region::North);
        assert_eq!("Yes".parse::<Irrigation>().unwrap(), Irrigation::Yes);
        assert_eq!(Crop::Soybean.to_string(), "soybean");
    }

    #[test]
    fn test_choice_is_case_sensitive() {
        assert!("North".parse::<Region>().is_err());
        assert!("yes".parse::<Irrigation>().is_err());
        assert!("".parse::<SoilType>().is_err());
    }

    #[test]
    fn test_fields_deserialize_with_missing_keys() {
        let fields: YieldFormFields =
            serde_json::from_str(r#"{"region":"east","daysToHarvest":"90"}"#).unwrap();
        assert_eq!(fields.region, "east");
        assert_eq!(fields.days_to_harvest, "90");
        assert!(fields.soil_type.is_empty());
    }

    #[test]
    fn test_irrigation_serializes_capitalized() {
        let json = serde_json::to_string(&Irrigation::No).unwrap();
        assert_eq!(json, "\"No\"");
    }
}
