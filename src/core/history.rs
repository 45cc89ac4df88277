//! Step history tracking.
//!
//! Every step archives the state a record occupied, together with that
//! state's last-update timestamp, before the handler runs. Entries are kept
//! most-recent-first.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Snapshot of a record taken right before a step ran.
///
/// # Example
///
/// ```rust
/// use stepwise::core::HistoryEntry;
///
/// let entry = HistoryEntry {
///     state: "Start".to_string(),
///     updated: 1_700_000_000_000,
/// };
/// assert_eq!(entry.state, "Start");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct HistoryEntry<S: State> {
    /// The state the record was in
    pub state: S,
    /// When that state was last updated, in milliseconds since the epoch
    pub updated: i64,
}

/// Most-recent-first log of the states a record has occupied.
///
/// # Example
///
/// ```rust
/// use stepwise::core::{History, HistoryEntry};
///
/// let mut history = History::new();
/// history.archive(HistoryEntry { state: "Start".to_string(), updated: 10 });
/// history.archive(HistoryEntry { state: "Middle".to_string(), updated: 20 });
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().map(|e| e.state.as_str()), Some("Middle"));
///
/// let path = history.path();
/// assert_eq!(path[0], "Start");
/// assert_eq!(path[1], "Middle");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", transparent)]
pub struct History<S: State> {
    entries: VecDeque<HistoryEntry<S>>,
}

impl<S: State> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> History<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Prepend a snapshot, making it the new `latest()`.
    pub fn archive(&mut self, entry: HistoryEntry<S>) {
        self.entries.push_front(entry);
    }

    /// The snapshot taken by the most recent step.
    pub fn latest(&self) -> Option<&HistoryEntry<S>> {
        self.entries.front()
    }

    /// Entry at `index`, counting from the most recent.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry<S>> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries most-recent-first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry<S>> {
        self.entries.iter()
    }

    /// Get the archived states in the order they were occupied.
    ///
    /// The current state of the record is not part of its history, so it
    /// does not appear here.
    pub fn path(&self) -> Vec<&S> {
        self.entries.iter().rev().map(|entry| &entry.state).collect()
    }

    /// Time between the oldest and the most recent snapshot.
    ///
    /// Returns `None` for an empty history or when the timestamps run
    /// backwards.
    pub fn duration(&self) -> Option<Duration> {
        let (newest, oldest) = (self.entries.front()?, self.entries.back()?);
        let elapsed = newest.updated.checked_sub(oldest.updated)?;
        u64::try_from(elapsed).ok().map(Duration::from_millis)
    }
}

impl<'a, S: State> IntoIterator for &'a History<S> {
    type Item = &'a HistoryEntry<S>;
    type IntoIter = std::collections::vec_deque::Iter<'a, HistoryEntry<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(state: &str, updated: i64) -> HistoryEntry<String> {
        HistoryEntry {
            state: state.to_string(),
            updated,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: History<String> = History::new();
        assert_eq!(history.len(), 0);
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn archive_prepends() {
        let mut history = History::new();
        history.archive(entry("Start", 1));
        history.archive(entry("Middle", 2));

        assert_eq!(history.latest(), Some(&entry("Middle", 2)));
        assert_eq!(history.get(1), Some(&entry("Start", 1)));
        assert!(history.get(2).is_none());
    }

    #[test]
    fn iter_is_most_recent_first() {
        let mut history = History::new();
        history.archive(entry("A", 1));
        history.archive(entry("B", 2));
        history.archive(entry("C", 3));

        let states: Vec<&str> = history.iter().map(|e| e.state.as_str()).collect();
        assert_eq!(states, vec!["C", "B", "A"]);
    }

    #[test]
    fn path_is_oldest_first() {
        let mut history = History::new();
        history.archive(entry("A", 1));
        history.archive(entry("B", 2));

        let path = history.path();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], "A");
        assert_eq!(path[1], "B");
    }

    #[test]
    fn duration_spans_oldest_to_newest() {
        let mut history = History::new();
        history.archive(entry("A", 1_000));
        history.archive(entry("B", 1_250));
        history.archive(entry("C", 1_500));

        assert_eq!(history.duration(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn single_entry_has_duration_zero() {
        let mut history = History::new();
        history.archive(entry("A", 42));

        assert_eq!(history.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn backwards_clock_has_no_duration() {
        let mut history = History::new();
        history.archive(entry("A", 500));
        history.archive(entry("B", 100));

        assert!(history.duration().is_none());
    }

    #[test]
    fn history_serializes_as_plain_list() {
        let mut history = History::new();
        history.archive(entry("Start", 7));

        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json, serde_json::json!([{ "state": "Start", "updated": 7 }]));

        let back: History<String> = serde_json::from_value(json).unwrap();
        assert_eq!(back, history);
    }
}
