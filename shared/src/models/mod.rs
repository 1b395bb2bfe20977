//! Domain models for the AgroSense platform

mod chat;
mod market;
mod weather;

pub use chat::*;
pub use market::*;
pub use weather::*;

use thiserror::Error;

/// A state or crop that is absent from the fixture data.
///
/// This is a normal lookup outcome, not a load failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("State \"{0}\" not found")]
    UnknownState(String),

    #[error("Crop \"{crop}\" not found for {state}")]
    UnknownCrop { crop: String, state: String },

    #[error("Weather data for \"{0}\" not found")]
    UnknownWeatherState(String),
}
