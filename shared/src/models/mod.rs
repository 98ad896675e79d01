//! Domain models for the crop advisor forms

mod forms;
mod prediction;
mod submission;
mod weather;

pub use forms::*;
pub use prediction::*;
pub use submission::*;
pub use weather::*;
