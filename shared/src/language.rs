//! Keyword-based language detection for English and Hausa input

use crate::types::Language;

/// Common Hausa words and particles.
///
/// Matching is plain substring containment on lowercased text, so short
/// particles such as "za" and "ina" also fire inside longer words.
pub const HAUSA_KEYWORDS: [&str; 19] = [
    "yaya", "yaushe", "ina", "farashin", "nawa", "menene", "za", "sannu", "nagode", "don",
    "yanayi", "kasuwa", "amfani", "hatsi", "shinkafa", "tumatir", "dawa", "wake", "jihar",
];

/// Number of Hausa keywords present in the text
pub fn hausa_keyword_matches(text: &str) -> usize {
    let lower = text.to_lowercase();
    HAUSA_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count()
}

/// Classify free text as Hausa if any Hausa keyword occurs, else English
pub fn detect_language(text: &str) -> Language {
    if hausa_keyword_matches(text) >= 1 {
        Language::Hausa
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_detect_english() {
        assert_eq!(detect_language("What is the price of maize?"), Language::English);
        assert_eq!(detect_language("How is the weather today?"), Language::English);
    }

    #[test]
    fn test_detect_hausa() {
        assert_eq!(detect_language("Farashin hatsi a Kano?"), Language::Hausa);
        assert_eq!(detect_language("Sannu"), Language::Hausa);
        assert_eq!(detect_language("YANAYI"), Language::Hausa);
    }

    #[test]
    fn test_empty_is_english() {
        assert_eq!(detect_language(""), Language::English);
    }

    #[test]
    fn test_counts_every_keyword() {
        assert_eq!(hausa_keyword_matches("farashin hatsi"), 2);
        assert_eq!(hausa_keyword_matches("hello"), 0);
    }

    #[test]
    fn test_substring_match_inside_english_word() {
        // "ina" occurs inside "China"
        assert_eq!(detect_language("China"), Language::Hausa);
    }

    proptest! {
        #[test]
        fn prop_any_keyword_means_hausa(idx in 0usize..HAUSA_KEYWORDS.len(), prefix in "[A-Z ]{0,10}") {
            let text = format!("{}{}", prefix, HAUSA_KEYWORDS[idx].to_uppercase());
            prop_assert_eq!(detect_language(&text), Language::Hausa);
        }

        #[test]
        fn prop_digits_are_english(text in "[0-9 ?!.]{0,40}") {
            prop_assert_eq!(detect_language(&text), Language::English);
        }
    }
}
