//! HTTP handlers for the conversational assistant

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{ChatMessage, ChatRole};

use crate::error::{AppError, AppResult};
use crate::services::chat::{ChatReply, ChatService};
use crate::services::stats::ChatStatsSnapshot;
use crate::AppState;

/// One prior turn as sent by the client
#[derive(Debug, Deserialize)]
pub struct HistoryEntry {
    pub role: ChatRole,
    pub content: String,
}

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(flatten)]
    pub reply: ChatReply,
}

/// Answer a chat message
/// POST /chat
pub async fn post_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(request) = payload?;

    let message = shared::validate_required(request.message.as_deref())
        .map_err(|_| AppError::Validation("Message is required".to_string()))?;

    let history: Vec<ChatMessage> = request
        .history
        .into_iter()
        .map(|entry| ChatMessage::new(entry.role, entry.content))
        .collect();
    shared::validate_history(&history).map_err(|e| AppError::Validation(e.to_string()))?;

    let service = ChatService::new(
        state.gateway.clone(),
        state.market_data.clone(),
        state.chat_stats.clone(),
    );
    let reply = service.handle_message(message, history).await?;

    Ok(Json(ChatResponse {
        success: true,
        reply,
    }))
}

/// Chat stats response
#[derive(Debug, Serialize)]
pub struct ChatStatsResponse {
    pub success: bool,
    pub stats: ChatStatsSnapshot,
}

/// GET /chat/stats
pub async fn get_chat_stats(State(state): State<AppState>) -> Json<ChatStatsResponse> {
    Json(ChatStatsResponse {
        success: true,
        stats: state.chat_stats.snapshot(),
    })
}
