//! Common types used across the platform

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// States covered by the fixture data, in display order
pub const SUPPORTED_STATES: [&str; 5] = ["Kano", "Kaduna", "Katsina", "Sokoto", "Kebbi"];

/// Crops covered by the fixture data (lowercase lookup keys)
pub const SUPPORTED_CROPS: [&str; 5] = ["maize", "rice", "tomato", "sorghum", "cowpea"];

/// Supported languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hausa,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Hausa];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hausa => "hausa",
        }
    }

    /// Human-readable language name, as used in prompts
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hausa => "Hausa",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "hausa" | "ha" => Ok(Language::Hausa),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Where a response's content came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// A configured external completion provider
    Live,
    /// Canned responses or static fixtures
    Mock,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Live => "live",
            DataSource::Mock => "mock",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative certainty label attached to a forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Moderate,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Low => write!(f, "low"),
            Confidence::Moderate => write!(f, "moderate"),
            Confidence::High => write!(f, "high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Hausa).unwrap(), "\"hausa\"");
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"english\"");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("Hausa".parse::<Language>().unwrap(), Language::Hausa);
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert!("french".parse::<Language>().is_err());
    }

    #[test]
    fn test_confidence_display() {
        assert_eq!(Confidence::Moderate.to_string(), "moderate");
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
    }
}
