//! Shared types and models for the Crop Advisor
//!
//! This crate contains the form schemas, payloads and submission state shared
//! between the backend and the browser (via WASM).

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
