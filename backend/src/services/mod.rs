//! Business logic services for the AgroSense backend

pub mod chat;
pub mod completion;
pub mod market_data;
pub mod speech;
pub mod stats;

pub use chat::ChatService;
pub use completion::ChatCompletionGateway;
pub use market_data::MarketDataService;
pub use speech::SpeechService;
pub use stats::{ChatStats, MarketRequestStats};
