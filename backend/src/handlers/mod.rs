//! HTTP handlers for the AgroSense API

mod chat;
mod forecast;
mod health;
mod market;
mod speech;
mod weather;

pub use chat::*;
pub use forecast::*;
pub use health::*;
pub use market::*;
pub use speech::*;
pub use weather::*;

use axum::{http::StatusCode, Json};
use serde::Deserialize;

use crate::error::{AppError, AppResult, ErrorResponse};

/// `?crop=&state=` query parameters
#[derive(Debug, Deserialize)]
pub struct CropQuery {
    pub crop: Option<String>,
    pub state: Option<String>,
}

impl CropQuery {
    /// Both parameters, or a validation error naming them
    pub fn required(&self) -> AppResult<(&str, &str)> {
        let crop = shared::validate_required(self.crop.as_deref());
        let state = shared::validate_required(self.state.as_deref());
        match (crop, state) {
            (Ok(crop), Ok(state)) => Ok((crop, state)),
            _ => Err(AppError::Validation(
                "Crop and state parameters are required".to_string(),
            )),
        }
    }
}

/// JSON 404 for unknown routes
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error: "Not found".to_string(),
        }),
    )
}
