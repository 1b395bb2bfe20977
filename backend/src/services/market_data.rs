//! Market and weather fixture access
//!
//! Fixtures are read from disk on every call. A missing state or crop is a
//! normal `NotFound`; an unreadable or malformed file is `AppError::Fixture`.

use serde::de::DeserializeOwned;
use shared::{MarketData, WeatherData};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const MARKET_FIXTURE: &str = "market.json";
pub const WEATHER_FIXTURE: &str = "weather.json";

/// Read-only access to the static market and weather fixtures
#[derive(Debug, Clone)]
pub struct MarketDataService {
    data_dir: PathBuf,
}

impl MarketDataService {
    /// Create a new MarketDataService reading fixtures from `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load prices (state -> crop -> record) and buyers (crop -> list)
    pub async fn load_market_data(&self) -> AppResult<MarketData> {
        self.read_fixture(MARKET_FIXTURE).await
    }

    /// Load weather alerts (state -> record)
    pub async fn load_weather_data(&self) -> AppResult<WeatherData> {
        self.read_fixture(WEATHER_FIXTURE).await
    }

    /// Whether a fixture file is present on disk
    pub async fn is_available(&self, file_name: &str) -> bool {
        tokio::fs::try_exists(self.data_dir.join(file_name))
            .await
            .unwrap_or(false)
    }

    async fn read_fixture<T: DeserializeOwned>(&self, file_name: &str) -> AppResult<T> {
        let path = self.data_dir.join(file_name);

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::Fixture {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        serde_json::from_str(&raw).map_err(|e| AppError::Fixture {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn fixtures() -> MarketDataService {
        MarketDataService::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    #[tokio::test]
    async fn test_load_market_data() {
        let data = fixtures().load_market_data().await.unwrap();
        let kano_maize = data.get_crop("Kano", "maize").unwrap();
        assert!(kano_maize.price > Decimal::ZERO);
        assert!(!kano_maize.unit.is_empty());
        assert!(!data.get_buyers("maize").is_empty());
    }

    #[tokio::test]
    async fn test_every_supported_pair_is_present() {
        let data = fixtures().load_market_data().await.unwrap();
        let weather = fixtures().load_weather_data().await.unwrap();
        for state in shared::SUPPORTED_STATES {
            assert!(weather.get_state(state).is_ok(), "missing weather for {}", state);
            for crop in shared::SUPPORTED_CROPS {
                assert!(data.get_crop(state, crop).is_ok(), "missing {} in {}", crop, state);
            }
        }
    }

    #[tokio::test]
    async fn test_repeated_loads_are_identical() {
        let service = fixtures();
        let first = service.load_weather_data().await.unwrap();
        let second = service.load_weather_data().await.unwrap();
        assert_eq!(first.alerts, second.alerts);
    }

    #[tokio::test]
    async fn test_missing_directory_is_fixture_error() {
        let service = MarketDataService::new("/nonexistent/agrosense");
        assert!(matches!(
            service.load_market_data().await,
            Err(AppError::Fixture { .. })
        ));
        assert!(!service.is_available(MARKET_FIXTURE).await);
    }
}
