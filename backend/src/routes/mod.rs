//! Route definitions for the AgroSense API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Service status
        .route("/health", get(handlers::health_check))
        .route("/config", get(handlers::get_config))
        // Market data
        .route("/market-prices", get(handlers::get_market_price))
        .route("/market-prices/stats", get(handlers::get_market_stats))
        .route("/forecast", get(handlers::get_forecast))
        .route("/weather", get(handlers::get_weather))
        // Assistant
        .route("/chat", post(handlers::post_chat))
        .route("/chat/stats", get(handlers::get_chat_stats))
        .nest("/speech", speech_routes())
}

/// Speech stub routes
fn speech_routes() -> Router<AppState> {
    Router::new()
        .route("/synthesize", post(handlers::synthesize_speech))
        .route("/recognize", post(handlers::recognize_speech))
}
