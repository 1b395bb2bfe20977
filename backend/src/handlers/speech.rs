//! HTTP handlers for speech stubs

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::speech::SpeechResult;
use crate::AppState;

/// Text-to-speech request body
#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_voice")]
    pub language: String,
}

fn default_voice() -> String {
    "en-US".to_string()
}

/// POST /speech/synthesize
pub async fn synthesize_speech(
    State(state): State<AppState>,
    payload: Result<Json<SynthesizeRequest>, JsonRejection>,
) -> AppResult<Json<SpeechResult>> {
    let Json(request) = payload?;
    Ok(Json(state.speech.text_to_speech(&request.text, &request.language)))
}

/// POST /speech/recognize (raw audio body)
pub async fn recognize_speech(State(state): State<AppState>, body: Bytes) -> Json<SpeechResult> {
    Json(state.speech.speech_to_text(&body, "en-US"))
}
