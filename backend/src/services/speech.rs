//! Speech synthesis and recognition stubs
//!
//! Speech is handled in the browser by the Web Speech API. These endpoints
//! exist so clients get an explicit "not available" answer from the server.

use serde::Serialize;

/// Result of a speech request
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpeechResult {
    pub success: bool,
    pub message: String,
    pub audio_url: Option<String>,
    pub text: Option<String>,
}

/// Speech service. Never configured.
#[derive(Debug, Clone, Default)]
pub struct SpeechService;

impl SpeechService {
    pub fn new() -> Self {
        Self
    }

    pub fn text_to_speech(&self, _text: &str, _language: &str) -> SpeechResult {
        SpeechResult {
            success: false,
            message: "Speech synthesis handled by Web Speech API on frontend".to_string(),
            audio_url: None,
            text: None,
        }
    }

    pub fn speech_to_text(&self, _audio: &[u8], _language: &str) -> SpeechResult {
        SpeechResult {
            success: false,
            message: "Speech recognition handled by Web Speech API on frontend".to_string(),
            audio_url: None,
            text: None,
        }
    }

    pub fn is_live(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_results_carry_explicit_nulls() {
        let json = serde_json::to_value(SpeechService::new().text_to_speech("Sannu", "ha-NG")).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("Web Speech API"));
        assert_eq!(json.get("audioUrl"), Some(&serde_json::Value::Null));
        assert_eq!(json.get("text"), Some(&serde_json::Value::Null));

        let json = serde_json::to_value(SpeechService::new().speech_to_text(&[0u8; 4], "en-US")).unwrap();
        assert_eq!(json.get("audioUrl"), Some(&serde_json::Value::Null));
        assert_eq!(json.get("text"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn test_never_live() {
        assert!(!SpeechService::new().is_live());
    }
}
