//! Chat completion gateway
//!
//! Produces the assistant reply for a conversation, either from a live
//! provider or from canned responses. In live mode, any provider failure or
//! timeout falls back to the canned responder for that request only; callers
//! always receive a reply string.

use shared::{latest_user_message, ChatMessage, DataSource, Language};
use std::sync::Arc;
use std::time::Duration;

use crate::config::CompletionMode;
use crate::error::AppResult;
use crate::external::{AzureOpenAiClient, CompletionProvider};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

enum Backend {
    Live(Arc<dyn CompletionProvider>),
    Mock,
}

/// Chooses between the live provider and the canned responder
pub struct ChatCompletionGateway {
    backend: Backend,
    timeout: Duration,
}

impl ChatCompletionGateway {
    /// Build the gateway for the mode resolved at startup
    pub fn from_mode(mode: &CompletionMode) -> AppResult<Self> {
        match mode {
            CompletionMode::Live(config) => {
                let client = AzureOpenAiClient::new(config)?;
                tracing::info!("Chat completions via {}", client.url());
                Ok(Self::live(Arc::new(client), config.timeout))
            }
            CompletionMode::Mock => Ok(Self::mock()),
        }
    }

    /// Gateway backed by an arbitrary provider, bounded by `timeout`
    pub fn live(provider: Arc<dyn CompletionProvider>, timeout: Duration) -> Self {
        Self {
            backend: Backend::Live(provider),
            timeout,
        }
    }

    pub fn mock() -> Self {
        Self {
            backend: Backend::Mock,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Whether a live provider is configured. This reflects configuration,
    /// not the outcome of any particular call.
    pub fn is_live(&self) -> bool {
        matches!(self.backend, Backend::Live(_))
    }

    pub fn data_source(&self) -> DataSource {
        if self.is_live() {
            DataSource::Live
        } else {
            DataSource::Mock
        }
    }

    /// Reply to the conversation in the requested language
    pub async fn get_chat_completion(&self, messages: &[ChatMessage], language: Language) -> String {
        let provider = match &self.backend {
            Backend::Mock => return mock_response(latest_user_message(messages), language),
            Backend::Live(provider) => provider,
        };

        let mut request = Vec::with_capacity(messages.len() + 1);
        request.push(ChatMessage::system(system_prompt(language)));
        request.extend_from_slice(messages);

        match tokio::time::timeout(self.timeout, provider.complete(&request)).await {
            Ok(Ok(content)) => content,
            Ok(Err(e)) => {
                tracing::warn!("Completion provider failed, using canned reply: {}", e);
                mock_response(latest_user_message(messages), language)
            }
            Err(_) => {
                tracing::warn!(
                    "Completion provider timed out after {:?}, using canned reply",
                    self.timeout
                );
                mock_response(latest_user_message(messages), language)
            }
        }
    }
}

/// Persona instruction sent ahead of every live conversation
pub fn system_prompt(language: Language) -> String {
    format!(
        "You are AgroSense, an intelligent assistant for smallholder farmers in Northern Nigeria.\n\
         Keep answers short, actionable, and in {}.\n\
         Always give simple recommendations and price forecasts in local terms (e.g., price per 100kg bag, per basket).\n\
         Focus on practical advice about market prices, weather conditions, planting times, and buyer connections.\n\
         Be friendly, respectful, and use local context (Northern Nigeria agricultural practices).\n\
         When discussing prices, use Naira (₦) and local market terms.",
        language.display_name()
    )
}

/// Topic of a message, as far as the canned responder is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockTopic {
    Price,
    Weather,
    Buyer,
    General,
}

const PRICE_KEYWORDS: [&str; 3] = ["price", "farashin", "market"];
const WEATHER_KEYWORDS: [&str; 2] = ["weather", "yanayi"];
const BUYER_KEYWORDS: [&str; 2] = ["buyer", "mai saye"];

pub fn mock_topic(user_message: &str) -> MockTopic {
    let lower = user_message.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if mentions(&PRICE_KEYWORDS) {
        MockTopic::Price
    } else if mentions(&WEATHER_KEYWORDS) {
        MockTopic::Weather
    } else if mentions(&BUYER_KEYWORDS) {
        MockTopic::Buyer
    } else {
        MockTopic::General
    }
}

/// Deterministic canned reply for the latest user message
pub fn mock_response(user_message: &str, language: Language) -> String {
    let reply = match (mock_topic(user_message), language) {
        (MockTopic::Price, Language::Hausa) => {
            "Sannu! Na iya taimaka maka da farashin amfanin gona. Ka tambaye ni game da hatsi, shinkafa, tumatir, dawa, ko wake. Ina jihar da kake?"
        }
        (MockTopic::Price, Language::English) => {
            "Hello! I can help you with crop prices. Ask me about maize, rice, tomato, sorghum, or cowpea. Which state are you in?"
        }
        (MockTopic::Weather, Language::Hausa) => {
            "Yanayin yau yana da kyau don noma. Ka tambaye ni game da jihar ka don samun cikakken bayani."
        }
        (MockTopic::Weather, Language::English) => {
            "Current weather conditions are favorable for farming. Ask me about your specific state for detailed information."
        }
        (MockTopic::Buyer, Language::Hausa) => {
            "Zan iya nuna maka masu siyan amfanin gona a yankinku. Wane irin amfani kake so ka sayar?"
        }
        (MockTopic::Buyer, Language::English) => {
            "I can show you buyers for your crops. What crop would you like to sell?"
        }
        (MockTopic::General, Language::Hausa) => {
            "Sannu! Ina AgroSense. Zan iya taimaka maka da farashin kasuwa, yanayi, da shawarwarin noma. Menene bukatarka?"
        }
        (MockTopic::General, Language::English) => {
            "Hello! I am AgroSense, your agricultural advisor. I can help with market prices, weather alerts, and farming recommendations. What would you like to know?"
        }
    };
    reply.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use async_trait::async_trait;
    use shared::ChatRole;
    use std::sync::Mutex;

    /// Provider that records what it was sent and replies with a fixed outcome
    struct FakeProvider {
        reply: Result<String, String>,
        delay: Duration,
        seen: Mutex<Vec<ChatMessage>>,
    }

    impl FakeProvider {
        fn ok(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                delay: Duration::ZERO,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err("503 Service Unavailable".to_string()),
                ..Self::ok("")
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay,
                ..Self::ok("too late")
            }
        }
    }

    #[async_trait]
    impl CompletionProvider for FakeProvider {
        async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String> {
            self.seen.lock().unwrap().extend_from_slice(messages);
            tokio::time::sleep(self.delay).await;
            self.reply.clone().map_err(AppError::UpstreamProvider)
        }
    }

    #[test]
    fn test_mock_topics() {
        assert_eq!(mock_topic("What is the market like?"), MockTopic::Price);
        assert_eq!(mock_topic("Farashin shinkafa"), MockTopic::Price);
        assert_eq!(mock_topic("Yanayi a Kano"), MockTopic::Weather);
        assert_eq!(mock_topic("Any BUYER for sorghum?"), MockTopic::Buyer);
        assert_eq!(mock_topic("Ina mai saye?"), MockTopic::Buyer);
        assert_eq!(mock_topic("Hello"), MockTopic::General);
    }

    #[test]
    fn test_price_takes_precedence_over_weather() {
        assert_eq!(mock_topic("weather and price"), MockTopic::Price);
    }

    #[test]
    fn test_mock_response_language() {
        assert!(mock_response("price?", Language::English).starts_with("Hello! I can help you with crop prices"));
        assert!(mock_response("farashin?", Language::Hausa).starts_with("Sannu!"));
        assert!(mock_response("", Language::English).contains("AgroSense"));
    }

    #[test]
    fn test_system_prompt_language() {
        assert!(system_prompt(Language::Hausa).contains("in Hausa."));
        assert!(system_prompt(Language::English).contains("in English."));
    }

    #[tokio::test]
    async fn test_mock_gateway() {
        let gateway = ChatCompletionGateway::mock();
        assert!(!gateway.is_live());
        assert_eq!(gateway.data_source(), DataSource::Mock);

        let reply = gateway
            .get_chat_completion(&[ChatMessage::user("How is the weather?")], Language::English)
            .await;
        assert!(reply.starts_with("Current weather conditions"));
    }

    #[tokio::test]
    async fn test_live_gateway_prefixes_system_prompt() {
        let provider = Arc::new(FakeProvider::ok("Sell within the week."));
        let gateway = ChatCompletionGateway::live(provider.clone(), Duration::from_secs(1));
        assert!(gateway.is_live());

        let history = vec![
            ChatMessage::user("Hello"),
            ChatMessage::assistant("Hi there"),
            ChatMessage::user("Should I sell?"),
        ];
        let reply = gateway.get_chat_completion(&history, Language::English).await;
        assert_eq!(reply, "Sell within the week.");

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0].role, ChatRole::System);
        assert_eq!(seen[1].content, "Hello");
        assert_eq!(seen[3].content, "Should I sell?");
    }

    #[tokio::test]
    async fn test_live_failure_falls_back_to_mock() {
        let gateway = ChatCompletionGateway::live(Arc::new(FakeProvider::failing()), Duration::from_secs(1));

        let reply = gateway
            .get_chat_completion(&[ChatMessage::user("Farashin hatsi?")], Language::Hausa)
            .await;
        assert_eq!(reply, mock_response("Farashin hatsi?", Language::Hausa));
        // Fallback is per request; the gateway still reports live
        assert!(gateway.is_live());
    }

    #[tokio::test]
    async fn test_live_timeout_falls_back_to_mock() {
        let gateway = ChatCompletionGateway::live(
            Arc::new(FakeProvider::slow(Duration::from_millis(500))),
            Duration::from_millis(20),
        );

        let reply = gateway
            .get_chat_completion(&[ChatMessage::user("buyer for rice")], Language::English)
            .await;
        assert_eq!(reply, mock_response("buyer for rice", Language::English));
    }
}
