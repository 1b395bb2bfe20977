//! WebAssembly module for the AgroSense client
//!
//! Lets the browser compute forecasts, detect message language, and render
//! localized names and replies offline, using the same rules as the server.

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::forecast::*;
pub use shared::types::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("AgroSense WASM module loaded"));
}

/// Forecast JSON for a price and percent change, or a readable error
fn forecast_json(price: f64, change_percent: f64) -> Result<String, String> {
    let price = shared::validate_price(price)?;
    let change = shared::validate_change_percent(change_percent)?;
    let forecast = shared::calculate_forecast(price, change);
    serde_json::to_string(&forecast).map_err(|e| format!("Failed to encode forecast: {}", e))
}

/// Calculate the 7-day price forecast.
///
/// Returns the forecast as a JSON string with the same shape the
/// `/forecast` endpoint uses.
#[wasm_bindgen]
pub fn calculate_forecast(price: f64, change_percent: f64) -> Result<String, JsValue> {
    forecast_json(price, change_percent).map_err(|e| JsValue::from_str(&e))
}

/// Detect whether a message is Hausa or English ("hausa" / "english")
#[wasm_bindgen]
pub fn detect_language(text: &str) -> String {
    shared::detect_language(text).as_str().to_string()
}

/// Display name of a crop in the given language ("english" or "hausa").
///
/// Unknown languages fall back to English; unknown crops yield `undefined`.
#[wasm_bindgen]
pub fn crop_display_name(crop: &str, language: &str) -> Option<String> {
    shared::crop_display_name(crop, parse_language(language)).map(str::to_string)
}

/// Substitute common English words with Hausa ones when `language` is Hausa.
///
/// English (and any unrecognized language) returns the text unchanged.
#[wasm_bindgen]
pub fn translate_response(text: &str, language: &str) -> String {
    shared::translate_response(text, parse_language(language))
}

/// State names as shown in the given language
#[wasm_bindgen]
pub fn state_names(language: &str) -> js_sys::Array {
    shared::state_names(parse_language(language))
        .iter()
        .map(|s| JsValue::from_str(s))
        .collect()
}

fn parse_language(language: &str) -> Language {
    language.parse().unwrap_or_default()
}

/// Supported states as a JS array of strings
#[wasm_bindgen]
pub fn supported_states() -> js_sys::Array {
    SUPPORTED_STATES.iter().map(|s| JsValue::from_str(s)).collect()
}

/// Supported crop identifiers as a JS array of strings
#[wasm_bindgen]
pub fn supported_crops() -> js_sys::Array {
    SUPPORTED_CROPS.iter().map(|c| JsValue::from_str(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_json() {
        let json = forecast_json(45000.0, 2.5).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["forecastPrice"], 46575);
        assert_eq!(value["predictedChange"], "3.5");
        assert_eq!(value["confidence"], "high");
    }

    #[test]
    fn test_forecast_json_rejects_bad_input() {
        assert!(forecast_json(f64::NAN, 1.0).is_err());
        assert!(forecast_json(45000.0, f64::INFINITY).is_err());
        assert!(forecast_json(0.0, 1.0).is_err());
        assert!(forecast_json(-100.0, 1.0).is_err());
    }

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language("Menene farashin masara?"), "hausa");
        assert_eq!(detect_language("What is the price of rice?"), "english");
    }

    #[test]
    fn test_translate_response() {
        assert_eq!(translate_response("Hello, good price today", "hausa"), "Sannu, Mai kyau Farashin Yau");
        assert_eq!(translate_response("Hello", "english"), "Hello");
        assert_eq!(translate_response("Hello", "klingon"), "Hello");
    }

    #[test]
    fn test_crop_display_name() {
        assert_eq!(crop_display_name("maize", "hausa").as_deref(), Some("Hatsi"));
        assert_eq!(crop_display_name("maize", "english").as_deref(), Some("Maize"));
        assert_eq!(crop_display_name("maize", "klingon").as_deref(), Some("Maize"));
        assert_eq!(crop_display_name("cassava", "hausa"), None);
    }
}
