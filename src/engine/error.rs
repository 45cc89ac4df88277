//! Step errors.

use super::handler::HandlerError;
use thiserror::Error;

/// Errors that abort a step.
#[derive(Debug, Error)]
pub enum StepError {
    /// The record's state has no registered handler. Raised before the
    /// record is touched and never routed to the catch handler.
    #[error("No handler registered for state '{state}'")]
    InvalidState { state: String },

    /// A handler failed and the catch handler passed the error on (or
    /// failed itself). Carries that error unchanged.
    #[error(transparent)]
    Unhandled(#[from] HandlerError),
}

impl StepError {
    /// The surfaced handler error, if this is one.
    pub fn handler_error(&self) -> Option<&HandlerError> {
        match self {
            Self::Unhandled(error) => Some(error),
            Self::InvalidState { .. } => None,
        }
    }
}
