//! HTTP handler for price forecasts

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Serialize;
use shared::{calculate_forecast, BuyerRecord, DataSource, ForecastResult};

use super::CropQuery;
use crate::error::AppResult;
use crate::AppState;

/// At most this many buyers accompany a forecast
const FORECAST_BUYER_LIMIT: usize = 2;

/// Forecast response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub success: bool,
    pub crop: String,
    pub state: String,
    pub unit: String,
    pub forecast: ForecastResult,
    pub suggested_buyers: Vec<BuyerRecord>,
    pub data_source: DataSource,
}

/// Forecast a crop's price over the next week
/// GET /forecast?crop=&state=
pub async fn get_forecast(
    State(state): State<AppState>,
    query: Result<Query<CropQuery>, QueryRejection>,
) -> AppResult<Json<ForecastResponse>> {
    let Query(query) = query?;
    let (crop, state_name) = query.required()?;

    let data = state.market_data.load_market_data().await?;
    let record = data.get_crop(state_name, crop)?;

    let forecast = calculate_forecast(record.price, record.change);
    tracing::debug!(
        crop,
        state = state_name,
        confidence = %forecast.confidence,
        "Calculated forecast"
    );

    let suggested_buyers = data
        .get_buyers(crop)
        .iter()
        .take(FORECAST_BUYER_LIMIT)
        .cloned()
        .collect();

    Ok(Json(ForecastResponse {
        success: true,
        crop: crop.to_string(),
        state: state_name.to_string(),
        unit: record.unit.clone(),
        forecast,
        suggested_buyers,
        data_source: DataSource::Mock,
    }))
}
