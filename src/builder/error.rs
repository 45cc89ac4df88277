//! Build errors for the handler table.

use thiserror::Error;

/// Errors that can occur when building a stepper.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("No handlers registered. Call .on(state, handler) before .build()")]
    NoHandlers,

    #[error("State '{state}' has more than one handler")]
    DuplicateHandler { state: String },

    #[error("Handler table has {} problems: {}", .0.len(), describe(.0))]
    Multiple(Vec<BuildError>),
}

fn describe(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl BuildError {
    /// Collapse accumulated problems into one error.
    pub(crate) fn from_problems(mut problems: Vec<BuildError>) -> Self {
        if problems.len() == 1 {
            problems.remove(0)
        } else {
            Self::Multiple(problems)
        }
    }
}
