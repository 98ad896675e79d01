//! External API integrations

pub mod crop_recommendation;
pub mod weather;
pub mod yield_prediction;

pub use crop_recommendation::CropRecommendationClient;
pub use weather::WeatherClient;
pub use yield_prediction::YieldPredictionClient;
