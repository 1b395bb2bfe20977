//! In-memory usage counters
//!
//! Each store is owned by `AppState` and shared across handlers through an
//! `Arc`. Updates take a mutex so concurrent increments are never lost.
//! Counters live for the process lifetime and are not persisted.

use serde::Serialize;
use shared::Language;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Chat volume by language
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct LanguageCounts {
    pub english: u64,
    pub hausa: u64,
}

/// Snapshot of chat usage
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatStatsSnapshot {
    pub total_chats: u64,
    pub language_counts: LanguageCounts,
}

/// Snapshot of market price lookups
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatsSnapshot {
    pub total_requests: u64,
    pub crop_counts: BTreeMap<String, u64>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // Counters stay usable even if a holder panicked
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Process-wide chat counters
#[derive(Debug, Default)]
pub struct ChatStats {
    inner: Mutex<ChatStatsSnapshot>,
}

impl ChatStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one chat in the given language
    pub fn record_chat(&self, language: Language) {
        let mut stats = lock(&self.inner);
        stats.total_chats += 1;
        match language {
            Language::English => stats.language_counts.english += 1,
            Language::Hausa => stats.language_counts.hausa += 1,
        }
    }

    pub fn snapshot(&self) -> ChatStatsSnapshot {
        lock(&self.inner).clone()
    }

    pub fn reset(&self) {
        *lock(&self.inner) = ChatStatsSnapshot::default();
    }
}

/// Process-wide market lookup counters
#[derive(Debug, Default)]
pub struct MarketRequestStats {
    inner: Mutex<MarketStatsSnapshot>,
}

impl MarketRequestStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one successful lookup. The crop key is lowercased.
    pub fn record_request(&self, crop: &str) {
        let mut stats = lock(&self.inner);
        stats.total_requests += 1;
        *stats.crop_counts.entry(crop.to_lowercase()).or_insert(0) += 1;
    }

    pub fn snapshot(&self) -> MarketStatsSnapshot {
        lock(&self.inner).clone()
    }

    pub fn reset(&self) {
        *lock(&self.inner) = MarketStatsSnapshot::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_record_chat() {
        let stats = ChatStats::new();
        stats.record_chat(Language::English);
        stats.record_chat(Language::Hausa);
        stats.record_chat(Language::Hausa);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total_chats, 3);
        assert_eq!(snapshot.language_counts.english, 1);
        assert_eq!(snapshot.language_counts.hausa, 2);
    }

    #[test]
    fn test_reset() {
        let stats = MarketRequestStats::new();
        stats.record_request("maize");
        stats.reset();
        assert_eq!(stats.snapshot(), MarketStatsSnapshot::default());
    }

    #[test]
    fn test_crop_counts_are_lowercased() {
        let stats = MarketRequestStats::new();
        stats.record_request("Maize");
        stats.record_request("maize");
        stats.record_request("rice");

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total_requests, 3);
        assert_eq!(snapshot.crop_counts.get("maize"), Some(&2));
        assert_eq!(snapshot.crop_counts.get("rice"), Some(&1));
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let chat = Arc::new(ChatStats::new());
        let market = Arc::new(MarketRequestStats::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let chat = Arc::clone(&chat);
                let market = Arc::clone(&market);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        let language = if i % 2 == 0 { Language::English } else { Language::Hausa };
                        chat.record_chat(language);
                        market.record_request("tomato");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let chat_snapshot = chat.snapshot();
        assert_eq!(chat_snapshot.total_chats, 8000);
        assert_eq!(chat_snapshot.language_counts.english, 4000);
        assert_eq!(chat_snapshot.language_counts.hausa, 4000);
        assert_eq!(market.snapshot().crop_counts.get("tomato"), Some(&8000));
    }

    #[test]
    fn test_snapshot_serialization() {
        let stats = ChatStats::new();
        stats.record_chat(Language::Hausa);
        let json = serde_json::to_value(stats.snapshot()).unwrap();
        assert_eq!(json["totalChats"], 1);
        assert_eq!(json["languageCounts"]["hausa"], 1);
    }
}
