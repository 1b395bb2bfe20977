//! Market price and buyer fixture models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::LookupError;

/// Current market price of one crop in one state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketRecord {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub unit: String,
    pub last_update: NaiveDate,
    /// Recent price movement in percent
    #[serde(with = "rust_decimal::serde::float")]
    pub change: Decimal,
}

/// A known buyer for a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuyerRecord {
    pub name: String,
    pub location: String,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
}

/// The full market fixture: prices by state then crop, buyers by crop
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MarketData {
    pub prices: BTreeMap<String, BTreeMap<String, MarketRecord>>,
    #[serde(default)]
    pub buyers: BTreeMap<String, Vec<BuyerRecord>>,
}

impl MarketData {
    /// Look up a crop's market record.
    ///
    /// The state is matched exactly as stored; the crop is lowercased first.
    pub fn get_crop(&self, state: &str, crop: &str) -> Result<&MarketRecord, LookupError> {
        let state_prices = self
            .prices
            .get(state)
            .ok_or_else(|| LookupError::UnknownState(state.to_string()))?;

        state_prices
            .get(&crop.to_lowercase())
            .ok_or_else(|| LookupError::UnknownCrop {
                crop: crop.to_string(),
                state: state.to_string(),
            })
    }

    /// Buyers interested in a crop; empty when the crop is unknown
    pub fn get_buyers(&self, crop: &str) -> &[BuyerRecord] {
        self.buyers
            .get(&crop.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MarketData {
        serde_json::from_str(
            r#"{
                "prices": {
                    "Kano": {
                        "maize": { "price": 45000, "unit": "100kg bag", "lastUpdate": "2025-01-15", "change": 2.5 }
                    }
                },
                "buyers": {
                    "maize": [
                        { "name": "Dangote Farms", "location": "Kano", "contact": "+234 803 000 0001" }
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_get_crop_lowercases_crop() {
        let data = sample();
        let record = data.get_crop("Kano", "MAIZE").unwrap();
        assert_eq!(record.price, Decimal::from(45000));
        assert_eq!(record.change, Decimal::new(25, 1));
    }

    #[test]
    fn test_get_crop_state_is_case_sensitive() {
        let data = sample();
        assert_eq!(
            data.get_crop("kano", "maize"),
            Err(LookupError::UnknownState("kano".to_string()))
        );
    }

    #[test]
    fn test_get_crop_unknown_crop() {
        let data = sample();
        let err = data.get_crop("Kano", "Yam").unwrap_err();
        assert_eq!(err.to_string(), "Crop \"Yam\" not found for Kano");
    }

    #[test]
    fn test_get_buyers_unknown_crop_is_empty() {
        let data = sample();
        assert_eq!(data.get_buyers("Maize").len(), 1);
        assert!(data.get_buyers("yam").is_empty());
    }

    #[test]
    fn test_market_record_serializes_numbers() {
        let data = sample();
        let json = serde_json::to_value(data.get_crop("Kano", "maize").unwrap()).unwrap();
        assert_eq!(json["price"], serde_json::json!(45000.0));
        assert_eq!(json["lastUpdate"], "2025-01-15");
    }
}
