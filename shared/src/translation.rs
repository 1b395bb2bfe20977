//! Localized display names and basic English-to-Hausa substitutions

use crate::types::{Language, SUPPORTED_STATES};

/// Display name of a crop in the given language, if the crop is supported
pub fn crop_display_name(crop: &str, language: Language) -> Option<&'static str> {
    let name = match (crop.to_lowercase().as_str(), language) {
        ("maize", Language::English) => "Maize",
        ("rice", Language::English) => "Rice",
        ("tomato", Language::English) => "Tomato",
        ("sorghum", Language::English) => "Sorghum",
        ("cowpea", Language::English) => "Cowpea",
        ("maize", Language::Hausa) => "Hatsi",
        ("rice", Language::Hausa) => "Shinkafa",
        ("tomato", Language::Hausa) => "Tumatir",
        ("sorghum", Language::Hausa) => "Dawa",
        ("cowpea", Language::Hausa) => "Wake",
        _ => return None,
    };
    Some(name)
}

/// State names as shown to users. They are the same in both languages.
pub fn state_names(_language: Language) -> &'static [&'static str] {
    &SUPPORTED_STATES
}

/// Word substitutions applied when a Hausa reply is requested
const HAUSA_GLOSSARY: [(&str, &str); 7] = [
    ("Hello", "Sannu"),
    ("Thank you", "Nagode"),
    ("Price", "Farashin"),
    ("Market", "Kasuwa"),
    ("Weather", "Yanayi"),
    ("Good", "Mai kyau"),
    ("Today", "Yau"),
];

/// Best-effort translation of an English reply.
///
/// English text is returned unchanged. For Hausa, each glossary term is
/// replaced case-insensitively wherever it occurs, in glossary order.
pub fn translate_response(text: &str, target: Language) -> String {
    match target {
        Language::English => text.to_string(),
        Language::Hausa => HAUSA_GLOSSARY
            .iter()
            .fold(text.to_string(), |acc, (english, hausa)| {
                replace_ignore_ascii_case(&acc, english, hausa)
            }),
    }
}

fn replace_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }

    // ASCII lowercasing keeps byte offsets aligned with the input
    let lower_haystack = haystack.to_ascii_lowercase();
    let lower_needle = needle.to_ascii_lowercase();

    let mut result = String::with_capacity(haystack.len());
    let mut cursor = 0;
    while let Some(pos) = lower_haystack[cursor..].find(&lower_needle) {
        let start = cursor + pos;
        result.push_str(&haystack[cursor..start]);
        result.push_str(replacement);
        cursor = start + needle.len();
    }
    result.push_str(&haystack[cursor..]);
    result
}
