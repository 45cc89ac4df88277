//! The step engine: one record, one transition per call.

use crate::builder::StepperBuilder;
use crate::core::{State, StatefulRecord};
use crate::engine::error::StepError;
use crate::engine::handler::{CatchHandler, Handler, Transition};
use tracing::{debug, trace, warn};

/// What a single step did to the record.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult<S: State> {
    /// The record was already done; nothing ran.
    Finished,

    /// A handler ran and the record ended up in the same state.
    Stayed { state: S },

    /// A handler ran and the record moved from `from` to `to`.
    Transitioned { from: S, to: S },
}

/// Handler table bound to a catch handler, ready to step records.
///
/// Built with [`Stepper::builder`] or
/// [`make_stepper`](crate::builder::make_stepper). `A` is the type of the
/// argument passed through to every handler on each step.
pub struct Stepper<S: State, D = (), A = ()> {
    handlers: Vec<(S, Handler<S, D, A>)>,
    catch: CatchHandler<S, D, A>,
}

impl<S: State + 'static, D: 'static, A: 'static> Stepper<S, D, A> {
    pub fn builder() -> StepperBuilder<S, D, A> {
        StepperBuilder::new()
    }
}

impl<S: State, D, A> Stepper<S, D, A> {
    pub(crate) fn from_parts(
        handlers: Vec<(S, Handler<S, D, A>)>,
        catch: CatchHandler<S, D, A>,
    ) -> Self {
        Self { handlers, catch }
    }

    /// Check whether a handler is registered for `state` (pure)
    pub fn handles(&self, state: &S) -> bool {
        self.handler_for(state).is_some()
    }

    /// Registered states, in registration order (pure)
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.handlers.iter().map(|(state, _)| state)
    }

    fn handler_for(&self, state: &S) -> Option<&Handler<S, D, A>> {
        self.handlers
            .iter()
            .find(|(registered, _)| registered == state)
            .map(|(_, handler)| handler)
    }

    /// Advance `record` by one transition.
    ///
    /// A done record is left alone. Otherwise the current `{state, updated}`
    /// is archived, `updated` is stamped, and the state's handler runs with
    /// the record and `args`. A handler error goes to the catch handler,
    /// whose result takes the handler's place. Finally a
    /// [`Transition::To`] is applied to `state`.
    ///
    /// # Errors
    ///
    /// - [`StepError::InvalidState`] if no handler matches `record.state`;
    ///   the record is unchanged.
    /// - [`StepError::Unhandled`] if the catch handler returns an error.
    ///   History and `updated` have already been written by then.
    pub async fn step(
        &self,
        record: &mut StatefulRecord<S, D>,
        args: &A,
    ) -> Result<StepResult<S>, StepError> {
        if record.done {
            trace!(state = record.state.name(), "record is done, skipping step");
            return Ok(StepResult::Finished);
        }

        let handler = self
            .handler_for(&record.state)
            .ok_or_else(|| StepError::InvalidState {
                state: record.state.name().to_string(),
            })?;

        let from = record.state.clone();
        record.archive();
        debug!(
            state = from.name(),
            history = record.history.len(),
            "running handler"
        );

        let result = (handler.action)(&mut *record, args).await;
        let transition = match result {
            Ok(transition) => transition,
            Err(error) => {
                warn!(
                    state = from.name(),
                    error = %error,
                    "handler failed, routing to catch handler"
                );
                (self.catch.action)(error, &mut *record, args).await?
            }
        };

        match transition {
            Transition::To(next) if next.name().is_empty() => {
                warn!(state = from.name(), "ignoring transition to an empty state name");
            }
            Transition::To(next) => record.state = next,
            Transition::NoChange | Transition::Mutated => {}
        }

        if record.state == from {
            Ok(StepResult::Stayed { state: from })
        } else {
            debug!(from = from.name(), to = record.state.name(), "transitioned");
            Ok(StepResult::Transitioned {
                from,
                to: record.state.clone(),
            })
        }
    }
}
