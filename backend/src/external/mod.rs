//! External API integrations

pub mod azure_openai;

pub use azure_openai::{AzureOpenAiClient, CompletionProvider};
