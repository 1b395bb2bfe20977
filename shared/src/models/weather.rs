//! Weather alert fixture models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::LookupError;

/// Current conditions and advisory for one state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherRecord {
    pub condition: String,
    pub temperature: String,
    pub alert: String,
}

/// The full weather fixture, keyed by state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeatherData {
    pub alerts: BTreeMap<String, WeatherRecord>,
}

impl WeatherData {
    /// Look up a state's weather. States are matched exactly as stored.
    pub fn get_state(&self, state: &str) -> Result<&WeatherRecord, LookupError> {
        self.alerts
            .get(state)
            .ok_or_else(|| LookupError::UnknownWeatherState(state.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_state() {
        let data: WeatherData = serde_json::from_str(
            r#"{ "alerts": { "Kano": { "condition": "Sunny", "temperature": "34°C", "alert": "No alerts" } } }"#,
        )
        .unwrap();

        assert_eq!(data.get_state("Kano").unwrap().condition, "Sunny");
        assert_eq!(
            data.get_state("Lagos").unwrap_err().to_string(),
            "Weather data for \"Lagos\" not found"
        );
    }
}
