//! Rule-based price forecast
//!
//! Maps a crop's current price and recent percent change to a 7-day outlook.
//! Rules are evaluated top to bottom and the first match wins:
//!
//! | change            | predicted change | confidence |
//! |-------------------|------------------|------------|
//! | > 2               | change + 1       | high       |
//! | < -2              | change - 1       | high       |
//! | (0, 2]            | change + 0.5     | moderate   |
//! | [-2, 0)           | change - 0.5     | moderate   |
//! | 0                 | 0.5              | low        |

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::Confidence;

/// Horizon reported with every forecast
pub const FORECAST_TIMEFRAME: &str = "next 7 days";

/// Forecast for one crop/state pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub current_price: Decimal,
    pub forecast_price: u64,
    /// Predicted percent change, always with exactly one decimal digit
    pub predicted_change: String,
    pub confidence: Confidence,
    pub recommendation: String,
    pub timeframe: String,
}

/// One row of the forecast rule table
#[derive(Debug, Clone, Copy)]
pub struct ForecastRule {
    pub applies: fn(Decimal) -> bool,
    pub predicted_change: fn(Decimal) -> Decimal,
    pub confidence: Confidence,
    pub recommendation: &'static str,
}

fn half() -> Decimal {
    Decimal::new(5, 1)
}

fn rising(change: Decimal) -> bool {
    change > Decimal::TWO
}

fn falling(change: Decimal) -> bool {
    change < -Decimal::TWO
}

fn slightly_up(change: Decimal) -> bool {
    change > Decimal::ZERO
}

fn slightly_down(change: Decimal) -> bool {
    change < Decimal::ZERO
}

fn flat(change: Decimal) -> bool {
    change.is_zero()
}

fn plus_one(change: Decimal) -> Decimal {
    change + Decimal::ONE
}

fn minus_one(change: Decimal) -> Decimal {
    change - Decimal::ONE
}

fn plus_half(change: Decimal) -> Decimal {
    change + half()
}

fn minus_half(change: Decimal) -> Decimal {
    change - half()
}

fn fixed_half(_change: Decimal) -> Decimal {
    half()
}

pub const FORECAST_RULES: [ForecastRule; 5] = [
    ForecastRule {
        applies: rising,
        predicted_change: plus_one,
        confidence: Confidence::High,
        recommendation: "Prices are rising. Consider selling soon to maximize profit.",
    },
    ForecastRule {
        applies: falling,
        predicted_change: minus_one,
        confidence: Confidence::High,
        recommendation: "Prices are falling. Hold your produce if possible or sell to secure buyers.",
    },
    ForecastRule {
        applies: slightly_up,
        predicted_change: plus_half,
        confidence: Confidence::Moderate,
        recommendation: "Prices are stable with slight upward trend. Good time to sell.",
    },
    ForecastRule {
        applies: slightly_down,
        predicted_change: minus_half,
        confidence: Confidence::Moderate,
        recommendation: "Prices showing slight decline. Monitor market closely.",
    },
    ForecastRule {
        applies: flat,
        predicted_change: fixed_half,
        confidence: Confidence::Low,
        recommendation: "Prices are stable. Standard market conditions apply.",
    },
];

/// First rule whose predicate holds for the given change
pub fn matching_rule(change_percent: Decimal) -> &'static ForecastRule {
    FORECAST_RULES
        .iter()
        .find(|rule| (rule.applies)(change_percent))
        .unwrap_or(&FORECAST_RULES[FORECAST_RULES.len() - 1])
}

/// Calculate the 7-day forecast for a price and its recent percent change.
///
/// The forecast price is rounded half away from zero and never negative.
pub fn calculate_forecast(current_price: Decimal, change_percent: Decimal) -> ForecastResult {
    let rule = matching_rule(change_percent);
    let predicted = (rule.predicted_change)(change_percent);

    let factor = Decimal::ONE + predicted / Decimal::ONE_HUNDRED;
    let forecast_price = current_price
        .saturating_mul(factor)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO)
        .to_u64()
        .unwrap_or(u64::MAX);

    ForecastResult {
        current_price,
        forecast_price,
        predicted_change: format_one_decimal(predicted),
        confidence: rule.confidence,
        recommendation: rule.recommendation.to_string(),
        timeframe: FORECAST_TIMEFRAME.to_string(),
    }
}

/// Render a decimal with exactly one fractional digit
pub fn format_one_decimal(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    rounded.to_string()
}
