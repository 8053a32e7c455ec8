// In-memory query cache with in-flight deduplication.
// Entries are keyed by a string tag and hold the last resolved value,
// the last error, and whether a request is currently in flight.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Cached values older than this are refetched when a view mounts: 5 minutes.
pub const STALE_TTL: Duration = Duration::from_secs(5 * 60);

/// Derived status of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never fetched.
    Idle,
    /// First fetch in flight, nothing resolved yet.
    Loading,
    /// Last fetch failed.
    Error,
    /// A value is cached and the last fetch succeeded.
    Success,
}

/// Per-key cache entry.
#[derive(Debug, Default)]
struct Entry {
    /// Last successfully resolved value, JSON-encoded so entries of
    /// different types can share the map.
    value: Option<Value>,
    /// Message of the last failure. Cleared by a later success.
    error: Option<String>,
    /// Whether a request for this key is currently in flight.
    in_flight: bool,
    /// When the value was last resolved.
    updated_at: Option<DateTime<Utc>>,
}

impl Entry {
    fn status(&self) -> QueryStatus {
        if self.error.is_some() {
            QueryStatus::Error
        } else if self.value.is_some() {
            QueryStatus::Success
        } else if self.in_flight {
            QueryStatus::Loading
        } else {
            QueryStatus::Idle
        }
    }
}

/// Observer-facing view of one cache entry, with the value deserialized.
#[derive(Debug, Clone)]
pub struct QuerySnapshot<T> {
    pub status: QueryStatus,
    pub data: Option<T>,
    pub error: Option<String>,
    pub is_fetching: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl<T> QuerySnapshot<T> {
    /// True until the first resolution: no value, no error, fetch pending.
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }
}

/// Process-wide query cache. One instance is created at startup and shared
/// for the process lifetime.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch for `key` as in flight. Returns false when a request is
    /// already running, in which case the caller must not spawn another:
    /// overlapping refetches collapse into the one in-flight request.
    pub fn begin(&self, key: &str) -> bool {
        let mut entries = self.entries.lock().expect("query cache poisoned");
        let entry = entries.entry(key.to_string()).or_default();
        if entry.in_flight {
            return false;
        }
        entry.in_flight = true;
        true
    }

    /// Record the outcome of an in-flight fetch. Success stores the value and
    /// clears any previous error; failure stores the message and leaves any
    /// stale value in place.
    pub fn settle(&self, key: &str, result: std::result::Result<Value, String>) {
        let mut entries = self.entries.lock().expect("query cache poisoned");
        let entry = entries.entry(key.to_string()).or_default();
        entry.in_flight = false;
        match result {
            Ok(value) => {
                entry.value = Some(value);
                entry.error = None;
                entry.updated_at = Some(Utc::now());
            }
            Err(message) => {
                entry.error = Some(message);
            }
        }
    }

    /// Read the current state of a key, deserializing the value for the
    /// observer. Unknown keys read as idle.
    pub fn snapshot<T: DeserializeOwned>(&self, key: &str) -> QuerySnapshot<T> {
        let entries = self.entries.lock().expect("query cache poisoned");
        match entries.get(key) {
            Some(entry) => QuerySnapshot {
                status: entry.status(),
                data: entry
                    .value
                    .as_ref()
                    .and_then(|value| serde_json::from_value(value.clone()).ok()),
                error: entry.error.clone(),
                is_fetching: entry.in_flight,
                updated_at: entry.updated_at,
            },
            None => QuerySnapshot {
                status: QueryStatus::Idle,
                data: None,
                error: None,
                is_fetching: false,
                updated_at: None,
            },
        }
    }

    /// Whether a key needs fetching: no resolved value yet, or the value is
    /// older than `ttl`.
    pub fn is_stale(&self, key: &str, ttl: Duration) -> bool {
        let entries = self.entries.lock().expect("query cache poisoned");
        let Some(entry) = entries.get(key) else {
            return true;
        };
        match entry.updated_at {
            Some(updated_at) => {
                let elapsed = Utc::now()
                    .signed_duration_since(updated_at)
                    .to_std()
                    .unwrap_or(Duration::MAX);
                elapsed > ttl
            }
            None => true,
        }
    }

    #[cfg(test)]
    fn age_entry(&self, key: &str, age: chrono::Duration) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get_mut(key) {
            entry.updated_at = entry.updated_at.map(|t| t - age);
        }
    }
}
