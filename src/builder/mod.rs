//! Builder API for constructing steppers.
//!
//! This module provides a fluent builder, a one-call constructor and the
//! `state_enum!` macro for defining states with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod stepper;

pub use error::BuildError;
pub use stepper::StepperBuilder;

use crate::core::State;
use crate::engine::{Handler, Stepper};

/// Build a stepper from `(state, handler)` pairs with the default
/// rethrowing catch handler.
///
/// # Example
///
/// ```
/// use stepwise::builder::make_stepper;
/// use stepwise::engine::Handler;
///
/// let stepper = make_stepper::<String, (), ()>(vec![
///     ("Start".to_string(), Handler::goto("End".to_string())),
/// ])
/// .unwrap();
/// assert!(stepper.handles(&"Start".to_string()));
/// ```
pub fn make_stepper<S, D, A>(
    handlers: impl IntoIterator<Item = (S, Handler<S, D, A>)>,
) -> Result<Stepper<S, D, A>, BuildError>
where
    S: State + 'static,
    D: 'static,
    A: 'static,
{
    StepperBuilder::new().handlers(handlers).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_stepper_builds() {
        let stepper = make_stepper::<String, (), ()>(vec![
            ("Start".to_string(), Handler::goto("Middle".to_string())),
            ("Middle".to_string(), Handler::goto("Start".to_string())),
        ])
        .unwrap();

        assert!(stepper.handles(&"Middle".to_string()));
    }

    #[test]
    fn make_stepper_rejects_empty_table() {
        let result = make_stepper::<String, (), ()>(Vec::new());
        assert!(matches!(result, Err(BuildError::NoHandlers)));
    }
}
