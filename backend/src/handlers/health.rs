//! Health check and client configuration handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{DataSource, Language, SUPPORTED_CROPS, SUPPORTED_STATES};

use crate::services::market_data::{MARKET_FIXTURE, WEATHER_FIXTURE};
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub mode: DataSource,
    pub services: ServiceFlags,
}

#[derive(Serialize)]
pub struct ServiceFlags {
    pub azure_openai: bool,
    pub market_data: bool,
    pub weather_data: bool,
    pub speech: bool,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let services = ServiceFlags {
        azure_openai: state.gateway.is_live(),
        market_data: state.market_data.is_available(MARKET_FIXTURE).await,
        weather_data: state.market_data.is_available(WEATHER_FIXTURE).await,
        speech: state.speech.is_live(),
    };

    Json(HealthResponse {
        success: true,
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        mode: state.gateway.data_source(),
        services,
    })
}

#[derive(Serialize)]
pub struct ConfigResponse {
    pub success: bool,
    pub mode: DataSource,
    pub states: Vec<&'static str>,
    pub crops: Vec<&'static str>,
    pub languages: Vec<Language>,
}

/// Supported states, crops and languages for the client
/// GET /config
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        success: true,
        mode: state.gateway.data_source(),
        states: SUPPORTED_STATES.to_vec(),
        crops: SUPPORTED_CROPS.to_vec(),
        languages: Language::ALL.to_vec(),
    })
}
