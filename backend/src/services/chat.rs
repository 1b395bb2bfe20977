//! Chat orchestration
//!
//! Detects the language of an incoming message, asks the completion gateway
//! for a reply, and appends a fixture-backed example when the message is
//! about prices or weather.

use serde::Serialize;
use shared::{detect_language, ChatMessage, DataSource, Language};
use std::sync::Arc;

use crate::error::AppResult;
use crate::services::completion::ChatCompletionGateway;
use crate::services::market_data::MarketDataService;
use crate::services::stats::ChatStats;

/// Representative fixture entry used for enrichment
const EXAMPLE_STATE: &str = "Kano";
const EXAMPLE_CROP: &str = "maize";

/// What a message is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatIntent {
    Price,
    Weather,
    General,
}

/// Classify a message by keyword. Price wins over weather.
pub fn classify_intent(message: &str) -> ChatIntent {
    let lower = message.to_lowercase();
    if lower.contains("price") || lower.contains("farashin") {
        ChatIntent::Price
    } else if lower.contains("weather") || lower.contains("yanayi") {
        ChatIntent::Weather
    } else {
        ChatIntent::General
    }
}

/// Assembled reply for one chat turn
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    pub language: Language,
    pub data_source_used: DataSource,
    pub enriched_with_data: bool,
}

/// Chat orchestration service
#[derive(Clone)]
pub struct ChatService {
    gateway: Arc<ChatCompletionGateway>,
    market_data: MarketDataService,
    stats: Arc<ChatStats>,
}

impl ChatService {
    /// Create a new ChatService instance
    pub fn new(
        gateway: Arc<ChatCompletionGateway>,
        market_data: MarketDataService,
        stats: Arc<ChatStats>,
    ) -> Self {
        Self {
            gateway,
            market_data,
            stats,
        }
    }

    /// Handle one user message with the client's prior history
    pub async fn handle_message(
        &self,
        message: &str,
        history: Vec<ChatMessage>,
    ) -> AppResult<ChatReply> {
        let language = detect_language(message);
        self.stats.record_chat(language);

        let mut messages = history;
        messages.push(ChatMessage::user(message));

        let intent = classify_intent(message);
        tracing::debug!(?intent, %language, turns = messages.len(), "Handling chat message");

        let mut response = self.gateway.get_chat_completion(&messages, language).await;

        let context = match intent {
            ChatIntent::Price => self.market_context().await?,
            ChatIntent::Weather => self.weather_context().await?,
            ChatIntent::General => None,
        };

        let enriched_with_data = match context {
            Some(context) => {
                response.push_str("\n\n");
                response.push_str(&context);
                true
            }
            None => false,
        };

        Ok(ChatReply {
            response,
            language,
            data_source_used: self.gateway.data_source(),
            enriched_with_data,
        })
    }

    /// One-line example price from the fixtures
    async fn market_context(&self) -> AppResult<Option<String>> {
        let data = self.market_data.load_market_data().await?;
        match data.get_crop(EXAMPLE_STATE, EXAMPLE_CROP) {
            Ok(record) => Ok(Some(format!(
                "Example: Maize in {} is currently ₦{} per {}.",
                EXAMPLE_STATE,
                record.price.normalize(),
                record.unit
            ))),
            Err(e) => {
                tracing::warn!("Skipping price enrichment: {}", e);
                Ok(None)
            }
        }
    }

    /// One-line example weather report from the fixtures
    async fn weather_context(&self) -> AppResult<Option<String>> {
        let data = self.market_data.load_weather_data().await?;
        match data.get_state(EXAMPLE_STATE) {
            Ok(weather) => Ok(Some(format!(
                "Example: Weather in {} is {}, {}. {}",
                EXAMPLE_STATE, weather.condition, weather.temperature, weather.alert
            ))),
            Err(e) => {
                tracing::warn!("Skipping weather enrichment: {}", e);
                Ok(None)
            }
        }
    }
}
