//! Last summary per URL, bounded.
//!
//! The history is plain data owned by the calling layer; it serializes to the
//! stored layout (a map from URL to entry, timestamps in epoch milliseconds).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::settings::Engine;

/// Entries kept before the oldest are evicted.
pub const MAX_HISTORY_ENTRIES: usize = 25;

/// One remembered summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub summary: String,
    /// Status line shown with the summary.
    #[serde(default)]
    pub meta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<Engine>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub ts: DateTime<Utc>,
}

/// Bounded map from page URL to its latest summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryHistory {
    entries: HashMap<String, HistoryEntry>,
}

impl SummaryHistory {
    /// Parse a stored history.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Settings`] for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for storage.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Settings`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Store `entry` for `url`, replacing any earlier one, then evict the
    /// oldest entries beyond [`MAX_HISTORY_ENTRIES`]. Empty URLs are ignored.
    pub fn record(&mut self, url: &str, entry: HistoryEntry) {
        if url.is_empty() {
            return;
        }
        self.entries.insert(url.to_string(), entry);
        self.evict();
    }

    /// [`record`](Self::record) stamped with the current time.
    pub fn record_now(&mut self, url: &str, summary: impl Into<String>, meta: impl Into<String>, engine: Option<Engine>) {
        self.record(
            url,
            HistoryEntry {
                summary: summary.into(),
                meta: meta.into(),
                engine,
                ts: Utc::now(),
            },
        );
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&HistoryEntry> {
        self.entries.get(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict(&mut self) {
        if self.entries.len() <= MAX_HISTORY_ENTRIES {
            return;
        }
        let mut by_age: Vec<(DateTime<Utc>, String)> = self
            .entries
            .iter()
            .map(|(url, entry)| (entry.ts, url.clone()))
            .collect();
        by_age.sort();
        let excess = self.entries.len() - MAX_HISTORY_ENTRIES;
        for (_, url) in by_age.into_iter().take(excess) {
            self.entries.remove(&url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(summary: &str, millis: i64) -> HistoryEntry {
        HistoryEntry {
            summary: summary.to_string(),
            meta: String::new(),
            engine: None,
            ts: Utc.timestamp_millis_opt(millis).single().unwrap_or_default(),
        }
    }

    #[test]
    fn test_record_replaces_same_url() {
        let mut history = SummaryHistory::default();
        history.record("https://a", entry("old", 1));
        history.record("https://a", entry("new", 2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.get("https://a").map(|e| e.summary.as_str()), Some("new"));
    }

    #[test]
    fn test_oldest_entries_are_evicted() {
        let mut history = SummaryHistory::default();
        for i in 0..30 {
            history.record(&format!("https://site/{i}"), entry("s", 1_000 + i));
        }
        assert_eq!(history.len(), MAX_HISTORY_ENTRIES);
        assert!(history.get("https://site/4").is_none());
        assert!(history.get("https://site/5").is_some());
        assert!(history.get("https://site/29").is_some());
    }

    #[test]
    fn test_refreshed_entry_survives_eviction() {
        let mut history = SummaryHistory::default();
        for i in 0..25 {
            history.record(&format!("https://site/{i}"), entry("s", 100 + i));
        }
        history.record("https://site/0", entry("again", 1_000));
        history.record("https://site/new", entry("s", 1_001));

        assert_eq!(history.len(), 25);
        assert!(history.get("https://site/0").is_some());
        assert!(history.get("https://site/1").is_none());
    }

    #[test]
    fn test_empty_url_is_ignored() {
        let mut history = SummaryHistory::default();
        history.record_now("", "x", "", None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_json_layout() {
        let mut history = SummaryHistory::default();
        history.record("https://a", HistoryEntry { engine: Some(Engine::Gemini), ..entry("sum", 1_700_000_000_000) });

        let json = history.to_json().unwrap_or_default();
        assert_eq!(json, r#"{"https://a":{"summary":"sum","meta":"","engine":"gemini","ts":1700000000000}}"#);

        let parsed = SummaryHistory::from_json(&json).unwrap_or_default();
        assert_eq!(parsed, history);
    }
}
