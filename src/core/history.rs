//! Apply history tracking.
//!
//! Provides immutable tracking of the transforms a container has applied,
//! following functional programming principles. Records hold key names
//! only, never values, so a history can be shared without exposing the
//! container's snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of apply records a container keeps unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Record of a single successful apply.
///
/// # Example
///
/// ```rust
/// use sprout::core::ApplyRecord;
/// use chrono::Utc;
///
/// let record = ApplyRecord {
///     sequence: 1,
///     transform: "soil +5".to_string(),
///     changed_keys: vec!["soil".to_string()],
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed("soil"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplyRecord {
    /// Position of this apply in the container's lifetime, starting at 1
    pub sequence: u64,
    /// Label of the transform that was applied
    pub transform: String,
    /// Keys added, changed, or removed by the apply
    pub changed_keys: Vec<String>,
    /// When the apply completed
    pub timestamp: DateTime<Utc>,
}

impl ApplyRecord {
    /// Check whether this apply touched `key`.
    pub fn changed(&self, key: &str) -> bool {
        self.changed_keys.iter().any(|k| k == key)
    }
}

/// Ordered history of applies.
///
/// The `record` method returns a new history with the record added and
/// leaves the original untouched; owners that keep a history over a long
/// lifetime use `push` instead. A history may be bounded, in which case only
/// the most recent records are kept.
///
/// # Example
///
/// ```rust
/// use sprout::core::{ApplyHistory, ApplyRecord};
/// use chrono::Utc;
///
/// let history = ApplyHistory::new();
/// let record = ApplyRecord {
///     sequence: 1,
///     transform: "name = Phil".to_string(),
///     changed_keys: vec!["name".to_string()],
///     timestamp: Utc::now(),
/// };
///
/// let new_history = history.record(record);
/// assert_eq!(new_history.len(), 1);
/// assert!(history.is_empty()); // Original unchanged
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyHistory {
    records: Vec<ApplyRecord>,
    limit: Option<usize>,
}

impl ApplyHistory {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history that keeps at most `limit` records.
    pub fn bounded(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Record an apply, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history.
    /// When bounded, the oldest records are dropped to make room.
    pub fn record(&self, record: ApplyRecord) -> Self {
        let mut next = self.clone();
        next.push(record);
        next
    }

    /// Append a record in place, dropping the oldest records past the limit.
    pub fn push(&mut self, record: ApplyRecord) {
        self.records.push(record);
        if let Some(limit) = self.limit {
            let excess = self.records.len().saturating_sub(limit);
            self.records.drain(..excess);
        }
    }

    /// All retained records in order.
    pub fn records(&self) -> &[ApplyRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&ApplyRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Distinct keys touched by the retained records, in first-touch order.
    pub fn keys_touched(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for key in self.records.iter().flat_map(|r| &r.changed_keys) {
            if !keys.contains(&key.as_str()) {
                keys.push(key.as_str());
            }
        }
        keys
    }

    /// Calculate total duration from first to last retained record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
