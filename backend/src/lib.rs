//! AgroSense Agent - Backend
//!
//! An agricultural advisory service for smallholder farmers in Northern
//! Nigeria: crop prices, weather alerts, rule-based price forecasts and a
//! bilingual (English/Hausa) assistant.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::{any::Any, sync::Arc};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::{CompletionMode, Config};

use error::{AppResult, ErrorResponse, INTERNAL_ERROR_MESSAGE};
use services::{ChatCompletionGateway, ChatStats, MarketDataService, MarketRequestStats, SpeechService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub market_data: MarketDataService,
    pub gateway: Arc<ChatCompletionGateway>,
    pub chat_stats: Arc<ChatStats>,
    pub market_stats: Arc<MarketRequestStats>,
    pub speech: SpeechService,
}

impl AppState {
    /// Build state from configuration, choosing live or mock completions once
    pub fn new(config: Config) -> AppResult<Self> {
        let gateway = ChatCompletionGateway::from_mode(&config.completion_mode())?;
        Ok(Self::with_gateway(config, gateway))
    }

    /// Build state around an explicit completion gateway
    pub fn with_gateway(config: Config, gateway: ChatCompletionGateway) -> Self {
        Self {
            market_data: MarketDataService::new(config.data.dir.clone()),
            config: Arc::new(config),
            gateway: Arc::new(gateway),
            chat_stats: Arc::new(ChatStats::new()),
            market_stats: Arc::new(MarketRequestStats::new()),
            speech: SpeechService::new(),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    Router::new()
        .route("/", get(root))
        .nest("/api", routes::api_routes())
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgroSense Agent API v1.0"
}

/// Turn a handler panic into the generic 500 body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);

    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            success: false,
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        }),
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, header::HeaderValue::from_static("no-store"));
    response
}
