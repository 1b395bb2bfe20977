//! HTTP handlers for market price endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Serialize;
use shared::{BuyerRecord, DataSource, MarketRecord};

use super::CropQuery;
use crate::error::AppResult;
use crate::services::stats::MarketStatsSnapshot;
use crate::AppState;

/// Market price response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPriceResponse {
    pub success: bool,
    pub crop: String,
    pub state: String,
    #[serde(flatten)]
    pub record: MarketRecord,
    pub suggested_buyers: Vec<BuyerRecord>,
    pub data_source: DataSource,
}

/// Get the current price of a crop in a state
/// GET /market-prices?crop=&state=
pub async fn get_market_price(
    State(state): State<AppState>,
    query: Result<Query<CropQuery>, QueryRejection>,
) -> AppResult<Json<MarketPriceResponse>> {
    let Query(query) = query?;
    let (crop, state_name) = query.required()?;

    let data = state.market_data.load_market_data().await?;
    let record = data.get_crop(state_name, crop)?.clone();

    state.market_stats.record_request(crop);

    Ok(Json(MarketPriceResponse {
        success: true,
        crop: crop.to_string(),
        state: state_name.to_string(),
        record,
        suggested_buyers: data.get_buyers(crop).to_vec(),
        data_source: DataSource::Mock,
    }))
}

/// Market stats response
#[derive(Debug, Serialize)]
pub struct MarketStatsResponse {
    pub success: bool,
    pub stats: MarketStatsSnapshot,
}

/// GET /market-prices/stats
pub async fn get_market_stats(State(state): State<AppState>) -> Json<MarketStatsResponse> {
    Json(MarketStatsResponse {
        success: true,
        stats: state.market_stats.snapshot(),
    })
}
