//! Validation utilities for AgroSense request inputs
//!
//! Numeric inputs are checked here, before they reach the forecast engine.

use rust_decimal::Decimal;

use crate::models::{ChatMessage, ChatRole};

// ============================================================================
// Request Parameter Validations
// ============================================================================

/// A required parameter must be present and non-empty
pub fn validate_required(value: Option<&str>) -> Result<&str, &'static str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err("Required parameter is missing"),
    }
}

/// Client-supplied history may only contain user and assistant turns
pub fn validate_history(history: &[ChatMessage]) -> Result<(), &'static str> {
    if history.iter().any(|m| m.role == ChatRole::System) {
        return Err("History may only contain user and assistant messages");
    }
    Ok(())
}

// ============================================================================
// Forecast Input Validations
// ============================================================================

/// Convert a client-side price to a decimal, rejecting NaN, infinities and
/// non-positive values
pub fn validate_price(price: f64) -> Result<Decimal, &'static str> {
    if !price.is_finite() {
        return Err("Price must be a finite number");
    }
    if price <= 0.0 {
        return Err("Price must be positive");
    }
    Decimal::try_from(price).map_err(|_| "Price is out of range")
}

/// Convert a client-side percent change to a decimal, rejecting NaN and
/// infinities
pub fn validate_change_percent(change: f64) -> Result<Decimal, &'static str> {
    if !change.is_finite() {
        return Err("Change percent must be a finite number");
    }
    Decimal::try_from(change).map_err(|_| "Change percent is out of range")
}
