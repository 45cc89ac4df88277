//! The stateful record threaded through the step engine.

use super::history::{History, HistoryEntry};
use super::state::{Initial, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record carrying a current state, its history and caller data.
///
/// The caller owns the record and lends it to
/// [`Stepper::step`](crate::engine::Stepper::step) by `&mut`. Handlers may
/// change any field; the engine itself only archives history, bumps
/// `updated` and assigns `state`.
///
/// # Example
///
/// ```rust
/// use stepwise::core::{make_state, StatefulRecord};
///
/// let record: StatefulRecord<String> = make_state();
/// assert_eq!(record.state, "Start");
/// assert!(!record.done);
/// assert!(record.history.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "D: Serialize",
    deserialize = "D: Deserialize<'de>"
))]
pub struct StatefulRecord<S: State, D = ()> {
    /// Current state
    pub state: S,
    /// Set by handlers once the record should not be stepped again
    pub done: bool,
    /// States occupied before the current one, most recent first
    pub history: History<S>,
    /// Milliseconds since the epoch of the most recent step
    pub updated: i64,
    /// Caller-defined fields
    pub data: D,
}

/// Build a fresh record in the initial state with default data.
///
/// # Example
///
/// ```rust
/// use stepwise::core::{make_state, StatefulRecord};
///
/// #[derive(Default, Debug, Clone, PartialEq)]
/// struct Job {
///     retries: u32,
/// }
///
/// let record: StatefulRecord<String, Job> = make_state();
/// assert_eq!(record.data, Job::default());
/// ```
pub fn make_state<S, D>() -> StatefulRecord<S, D>
where
    S: Initial,
    D: Default,
{
    StatefulRecord::new(D::default())
}

pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl<S: Initial, D> StatefulRecord<S, D> {
    /// Create a record in the initial state carrying `data`.
    pub fn new(data: D) -> Self {
        Self {
            state: S::initial(),
            done: false,
            history: History::new(),
            updated: now_millis(),
            data,
        }
    }
}

impl<S: State, D> StatefulRecord<S, D> {
    /// Override the state.
    pub fn with_state(mut self, state: S) -> Self {
        self.state = state;
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn with_history(mut self, history: History<S>) -> Self {
        self.history = history;
        self
    }

    /// Override the last-update timestamp (milliseconds since the epoch).
    pub fn with_updated(mut self, updated: i64) -> Self {
        self.updated = updated;
        self
    }

    /// Replace the caller data, possibly changing its type.
    pub fn with_data<T>(self, data: T) -> StatefulRecord<S, T> {
        StatefulRecord {
            state: self.state,
            done: self.done,
            history: self.history,
            updated: self.updated,
            data,
        }
    }

    /// `updated` as a UTC timestamp.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.updated)
    }

    /// Prepend the current `{state, updated}` to history and stamp the
    /// record with the current time.
    pub(crate) fn archive(&mut self) {
        self.history.archive(HistoryEntry {
            state: self.state.clone(),
            updated: self.updated,
        });
        self.updated = now_millis();
    }
}
