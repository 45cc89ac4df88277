//! Builder for the handler table.

use crate::builder::error::BuildError;
use crate::core::{State, StatefulRecord};
use crate::engine::{CatchHandler, Handler, HandlerError, HandlerResult, Stepper};
use futures::future::LocalBoxFuture;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for a [`Stepper`] with a fluent API.
pub struct StepperBuilder<S: State + 'static, D: 'static, A: 'static> {
    handlers: Vec<(S, Handler<S, D, A>)>,
    catch: Option<CatchHandler<S, D, A>>,
}

impl<S: State + 'static, D: 'static, A: 'static> StepperBuilder<S, D, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            catch: None,
        }
    }

    /// Register the handler for `state`.
    pub fn on(mut self, state: S, handler: Handler<S, D, A>) -> Self {
        self.handlers.push((state, handler));
        self
    }

    /// Register a synchronous handler for `state`.
    ///
    /// Unlike `on(state, Handler::sync(f))`, the closure's record and
    /// argument types come from the builder, so its body can reach into
    /// `record.data` without annotations.
    pub fn on_sync<F>(self, state: S, f: F) -> Self
    where
        F: Fn(&mut StatefulRecord<S, D>, &A) -> HandlerResult<S> + Send + Sync + 'static,
    {
        self.on(state, Handler::sync(f))
    }

    /// Register an async handler for `state`. See [`on_sync`](Self::on_sync).
    pub fn on_async<F>(self, state: S, f: F) -> Self
    where
        F: for<'a> Fn(&'a mut StatefulRecord<S, D>, &'a A) -> LocalBoxFuture<'a, HandlerResult<S>>
            + Send
            + Sync
            + 'static,
    {
        self.on(state, Handler::new(f))
    }

    /// Register a handler that always moves from `from` to `to`.
    pub fn goto(self, from: S, to: S) -> Self {
        self.on(from, Handler::goto(to))
    }

    /// Register several handlers at once.
    pub fn handlers(mut self, handlers: impl IntoIterator<Item = (S, Handler<S, D, A>)>) -> Self {
        self.handlers.extend(handlers);
        self
    }

    /// Set the catch handler (optional, defaults to rethrowing).
    pub fn catch(mut self, catch: CatchHandler<S, D, A>) -> Self {
        self.catch = Some(catch);
        self
    }

    /// Set a synchronous catch handler, typed by the builder.
    pub fn catch_sync<F>(self, f: F) -> Self
    where
        F: Fn(HandlerError, &mut StatefulRecord<S, D>, &A) -> HandlerResult<S>
            + Send
            + Sync
            + 'static,
    {
        self.catch(CatchHandler::sync(f))
    }

    /// Check the table, accumulating every problem.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        if self.handlers.is_empty() {
            return Validation::fail(BuildError::NoHandlers);
        }

        // Report each duplicated state once, at its second registration
        let checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = self
            .handlers
            .iter()
            .enumerate()
            .map(|(index, (state, _))| {
                let earlier = self.handlers[..index]
                    .iter()
                    .filter(|(other, _)| other == state)
                    .count();
                if earlier == 1 {
                    Validation::fail(BuildError::DuplicateHandler {
                        state: state.name().to_string(),
                    })
                } else {
                    Validation::success(())
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the stepper.
    ///
    /// Returns an error if the table is empty or a state is registered twice.
    /// An empty table is rejected here rather than accepted and left to fail
    /// with [`StepError::InvalidState`](crate::engine::StepError) on the
    /// first step, since no record could ever be stepped by it.
    pub fn build(self) -> Result<Stepper<S, D, A>, BuildError> {
        if let Validation::Failure(problems) = self.validate() {
            return Err(BuildError::from_problems(
                problems.iter().cloned().collect(),
            ));
        }

        let catch = self.catch.unwrap_or_else(CatchHandler::rethrow);
        Ok(Stepper::from_parts(self.handlers, catch))
    }
}

impl<S: State + 'static, D: 'static, A: 'static> Default for StepperBuilder<S, D, A> {
    fn default() -> Self {
        Self::new()
    }
}
