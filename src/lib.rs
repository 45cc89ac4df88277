//! Stepwise: a minimal finite-state-machine stepping engine
//!
//! A caller owns a [`StatefulRecord`] naming its current state. Each call to
//! [`Stepper::step`] archives that state into the record's history, runs the
//! handler registered for it, and applies the transition the handler
//! returns. Looping until the record is done, and any I/O, stay with the
//! caller.
//!
//! # Core Concepts
//!
//! - **Record**: state, `done` flag, most-recent-first history, last-update
//!   timestamp and caller data
//! - **Handlers**: one async function per state plus a single catch handler
//! - **Transition**: `NoChange`, `To(state)` or `Mutated`
//!
//! # Example
//!
//! ```rust
//! use stepwise::{make_state, Handler, StatefulRecord, Stepper, Transition};
//!
//! # futures::executor::block_on(async {
//! let stepper: Stepper<String> = Stepper::builder()
//!     .goto("Start".to_string(), "Middle".to_string())
//!     .goto("Middle".to_string(), "End".to_string())
//!     .on(
//!         "End".to_string(),
//!         Handler::sync(|record, _| {
//!             record.done = true;
//!             Ok(Transition::NoChange)
//!         }),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let mut record: StatefulRecord<String> = make_state();
//! while !record.done {
//!     stepper.step(&mut record, &()).await.unwrap();
//! }
//!
//! assert_eq!(record.state, "End");
//! // Every step archives, including the one that ran End's handler
//! assert_eq!(record.history.path(), vec!["Start", "Middle", "End"]);
//! # });
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{make_stepper, BuildError, StepperBuilder};
pub use self::core::{make_state, History, HistoryEntry, Initial, State, StatefulRecord};
pub use engine::{CatchHandler, Handler, HandlerError, StepError, StepResult, Stepper, Transition};
