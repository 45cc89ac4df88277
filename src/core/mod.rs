//! Core record types.
//!
//! This module contains the data the step engine works on:
//! - State identifiers via the `State` and `Initial` traits
//! - The most-recent-first step history
//! - The stateful record and its constructor
//!
//! Nothing here performs I/O beyond reading the clock.

mod history;
mod record;
mod state;

pub use history::{History, HistoryEntry};
pub use record::{make_state, StatefulRecord};
pub use state::{Initial, State, START};
