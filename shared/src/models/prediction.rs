//! Request payloads for the prediction services and result statements

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    Crop, Fertilizer, Irrigation, RecommendationFormInput, Region, SoilType, WeatherSnapshot,
    YieldFormInput,
};

/// Yield form merged with the weather lookup for its region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YieldPredictionRequest {
    pub region: Region,
    pub soil_type: SoilType,
    pub crop: Crop,
    pub fertilizer: Fertilizer,
    pub irrigation: Irrigation,
    pub days_to_harvest: u32,
    pub temperature_celsius: f64,
    pub precipitation_mm: f64,
    pub humidity_percent: f64,
}

impl YieldPredictionRequest {
    pub fn new(input: &YieldFormInput, weather: &WeatherSnapshot) -> Self {
        Self {
            region: input.region,
            soil_type: input.soil_type,
            crop: input.crop,
            fertilizer: input.fertilizer,
            irrigation: input.irrigation,
            days_to_harvest: input.days_to_harvest,
            temperature_celsius: weather.temperature_celsius,
            precipitation_mm: weather.precipitation_mm,
            humidity_percent: weather.humidity_percent,
        }
    }
}

/// Soil parameters sent to the crop recommender
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendationRequest {
    pub nitrogen: u32,
    pub phosphorus: u32,
    pub potassium: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub ph_value: Decimal,
}

impl From<RecommendationFormInput> for CropRecommendationRequest {
    fn from(input: RecommendationFormInput) -> Self {
        Self {
            nitrogen: input.nitrogen,
            phosphorus: input.phosphorus,
            potassium: input.potassium,
            ph_value: input.ph_value,
        }
    }
}

/// Statement shown after a successful yield prediction
pub fn format_yield_statement(yield_tons_per_hectare: f64) -> String {
    format!("Predicted yield: {} tons per hectare", yield_tons_per_hectare)
}

/// Statement shown after a successful recommendation
pub fn format_recommendation_statement<S: AsRef<str>>(crops: &[S]) -> String {
    let joined = crops.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
    format!("Recommended crops: {}", joined)
}
