//! HTTP handler for weather alerts

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{DataSource, WeatherRecord};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// `?state=` query parameter
#[derive(Debug, Deserialize)]
pub struct StateQuery {
    pub state: Option<String>,
}

/// Weather response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub success: bool,
    pub state: String,
    pub weather: WeatherRecord,
    pub data_source: DataSource,
}

/// Get current conditions and alerts for a state
/// GET /weather?state=
pub async fn get_weather(
    State(state): State<AppState>,
    query: Result<Query<StateQuery>, QueryRejection>,
) -> AppResult<Json<WeatherResponse>> {
    let Query(query) = query?;
    let state_name = shared::validate_required(query.state.as_deref())
        .map_err(|_| AppError::Validation("State parameter is required".to_string()))?;

    let data = state.market_data.load_weather_data().await?;
    let weather = data.get_state(state_name)?.clone();

    Ok(Json(WeatherResponse {
        success: true,
        state: state_name.to_string(),
        weather,
        data_source: DataSource::Mock,
    }))
}
