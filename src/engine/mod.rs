//! The step engine.
//!
//! This module is the imperative shell around the record types in
//! [`core`](crate::core): it looks up the handler for a record's state,
//! runs it, and applies the transition it returns.
//!
//! # Key Concepts
//!
//! - **Handlers**: async work bound to one state, returning a [`Transition`]
//! - **Catch handler**: receives any handler error; rethrows by default
//! - **Stepper**: advances one record by one transition per call
//!
//! Handlers can also be written as Stillwater effects with
//! [`Handler::effect`], using the pass-through argument as the environment.

mod error;
mod handler;
mod stepper;

pub use error::StepError;
pub use handler::{
    CatchFn, CatchHandler, Handler, HandlerError, HandlerFn, HandlerResult, Transition,
};
pub use stepper::{StepResult, Stepper};
