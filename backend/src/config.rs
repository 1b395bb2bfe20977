//! Configuration management for the AgroSense backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with AGROSENSE__ prefix
//! 4. The conventional PORT and AZURE_OPENAI_* variables

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Fixture data configuration
    pub data: DataConfig,

    /// Chat completion provider configuration
    pub provider: ProviderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding market.json and weather.json
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Provider API key
    pub api_key: Option<String>,

    /// Provider base endpoint, e.g. https://my-resource.openai.azure.com
    pub endpoint: Option<String>,

    /// Deployment (model) identifier
    pub deployment: String,

    /// REST API version query parameter
    pub api_version: String,

    /// Upper bound on a single completion call
    pub timeout_secs: u64,

    pub max_tokens: u32,

    pub temperature: f32,
}

/// Resolved settings for the live completion provider
#[derive(Debug, Clone, PartialEq)]
pub struct LiveProviderConfig {
    pub api_key: String,
    pub endpoint: String,
    pub deployment: String,
    pub api_version: String,
    pub timeout: Duration,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// How chat completions are produced, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionMode {
    Live(LiveProviderConfig),
    Mock,
}

impl CompletionMode {
    pub fn is_live(&self) -> bool {
        matches!(self, CompletionMode::Live(_))
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGROSENSE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("data.dir", "data")?
            .set_default("provider.deployment", "gpt-4o-mini")?
            .set_default("provider.api_version", "2024-02-15-preview")?
            .set_default("provider.timeout_secs", 15)?
            .set_default("provider.max_tokens", 300)?
            .set_default("provider.temperature", 0.7)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGROSENSE__ prefix)
            .add_source(
                Environment::with_prefix("AGROSENSE")
                    .separator("__")
                    .try_parsing(true),
            )
            // Conventional variable names take precedence
            .set_override_option("server.port", env_non_empty("PORT"))?
            .set_override_option("provider.api_key", env_non_empty("AZURE_OPENAI_KEY"))?
            .set_override_option("provider.endpoint", env_non_empty("AZURE_OPENAI_ENDPOINT"))?
            .set_override_option(
                "provider.deployment",
                env_non_empty("AZURE_OPENAI_DEPLOYMENT"),
            )?
            .build()?;

        config.try_deserialize()
    }

    /// Live mode requires both an API key and an endpoint
    pub fn completion_mode(&self) -> CompletionMode {
        let provider = &self.provider;
        match (non_empty(&provider.api_key), non_empty(&provider.endpoint)) {
            (Some(api_key), Some(endpoint)) => CompletionMode::Live(LiveProviderConfig {
                api_key: api_key.to_string(),
                endpoint: endpoint.trim_end_matches('/').to_string(),
                deployment: provider.deployment.clone(),
                api_version: provider.api_version.clone(),
                timeout: Duration::from_secs(provider.timeout_secs),
                max_tokens: provider.max_tokens,
                temperature: provider.temperature,
            }),
            _ => CompletionMode::Mock,
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            deployment: "gpt-4o-mini".to_string(),
            api_version: "2024-02-15-preview".to_string(),
            timeout_secs: 15,
            max_tokens: 300,
            temperature: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mock() {
        assert_eq!(Config::default().completion_mode(), CompletionMode::Mock);
    }

    #[test]
    fn test_key_without_endpoint_is_mock() {
        let mut config = Config::default();
        config.provider.api_key = Some("secret".to_string());
        assert_eq!(config.completion_mode(), CompletionMode::Mock);

        config.provider.endpoint = Some("   ".to_string());
        assert_eq!(config.completion_mode(), CompletionMode::Mock);
    }

    #[test]
    fn test_key_and_endpoint_is_live() {
        let mut config = Config::default();
        config.provider.api_key = Some("secret".to_string());
        config.provider.endpoint = Some("https://example.openai.azure.com/".to_string());

        match config.completion_mode() {
            CompletionMode::Live(live) => {
                assert_eq!(live.endpoint, "https://example.openai.azure.com");
                assert_eq!(live.deployment, "gpt-4o-mini");
                assert_eq!(live.timeout, Duration::from_secs(15));
            }
            CompletionMode::Mock => panic!("Expected live mode"),
        }
    }
}
