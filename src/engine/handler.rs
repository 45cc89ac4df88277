//! State handlers and the transitions they return.

use crate::core::{State, StatefulRecord};
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use std::sync::Arc;
use stillwater::effect::{BoxedEffect, Effect};

/// Error raised by a handler. Any error type converts into it with `?`.
pub type HandlerError = anyhow::Error;

/// What a handler returns.
pub type HandlerResult<S> = Result<Transition<S>, HandlerError>;

/// How the engine should treat `state` after a handler ran.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition<S: State> {
    /// Nothing to apply. Any direct change the handler made stands.
    NoChange,

    /// Move to the given state.
    To(S),

    /// The handler updated the record itself, `state` included.
    Mutated,
}

/// Async state handler function.
pub type HandlerFn<S, D, A> = Arc<
    dyn for<'a> Fn(&'a mut StatefulRecord<S, D>, &'a A) -> LocalBoxFuture<'a, HandlerResult<S>>
        + Send
        + Sync,
>;

/// Async catch handler function, receiving the handler's error first.
pub type CatchFn<S, D, A> = Arc<
    dyn for<'a> Fn(
            HandlerError,
            &'a mut StatefulRecord<S, D>,
            &'a A,
        ) -> LocalBoxFuture<'a, HandlerResult<S>>
        + Send
        + Sync,
>;

/// Work bound to one state.
///
/// # Example
///
/// ```rust
/// use stepwise::engine::{Handler, Transition};
///
/// let start: Handler<String, (), ()> = Handler::sync(|record, _args| {
///     if record.history.is_empty() {
///         Ok(Transition::To("Middle".to_string()))
///     } else {
///         Ok(Transition::NoChange)
///     }
/// });
/// let middle: Handler<String, (), ()> = Handler::goto("End".to_string());
/// ```
pub struct Handler<S: State, D, A> {
    pub(crate) action: HandlerFn<S, D, A>,
}

impl<S: State + 'static, D: 'static, A: 'static> Handler<S, D, A> {
    /// Wrap an async handler.
    ///
    /// The closure receives the record and the pass-through argument and
    /// returns a boxed future, usually `Box::pin(async move { ... })`.
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a mut StatefulRecord<S, D>, &'a A) -> LocalBoxFuture<'a, HandlerResult<S>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            action: Arc::new(f),
        }
    }

    /// Wrap a synchronous handler.
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(&mut StatefulRecord<S, D>, &A) -> HandlerResult<S> + Send + Sync + 'static,
    {
        Self::new(move |record, args| future::ready(f(record, args)).boxed_local())
    }

    /// Handler that always moves to `next`.
    pub fn goto(next: S) -> Self {
        Self::sync(move |_record, _args| Ok(Transition::To(next.clone())))
    }
}

impl<S, D, A> Handler<S, D, A>
where
    S: State + 'static,
    D: 'static,
    A: Clone + Send + Sync + 'static,
{
    /// Build the transition as a Stillwater effect.
    ///
    /// `f` inspects the record and returns an effect that is run with the
    /// pass-through argument as its environment. The record is read-only
    /// here; the effect decides only where to go next.
    pub fn effect<F>(f: F) -> Self
    where
        F: Fn(&StatefulRecord<S, D>) -> BoxedEffect<Transition<S>, HandlerError, A>
            + Send
            + Sync
            + 'static,
    {
        Self::new(move |record, args| {
            let effect = f(record);
            async move { effect.run(args).await }.boxed_local()
        })
    }
}

impl<S: State, D, A> Clone for Handler<S, D, A> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
        }
    }
}

/// The single handler that receives errors raised by state handlers.
///
/// Its result replaces the failed handler's transition. An error it
/// returns is surfaced to the caller of the step.
pub struct CatchHandler<S: State, D, A> {
    pub(crate) action: CatchFn<S, D, A>,
}

impl<S: State + 'static, D: 'static, A: 'static> CatchHandler<S, D, A> {
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(
                HandlerError,
                &'a mut StatefulRecord<S, D>,
                &'a A,
            ) -> LocalBoxFuture<'a, HandlerResult<S>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            action: Arc::new(f),
        }
    }

    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(HandlerError, &mut StatefulRecord<S, D>, &A) -> HandlerResult<S>
            + Send
            + Sync
            + 'static,
    {
        Self::new(move |error, record, args| future::ready(f(error, record, args)).boxed_local())
    }

    /// Catch handler that hands the error straight back.
    pub fn rethrow() -> Self {
        Self::sync(|error, _record, _args| Err(error))
    }
}

impl<S: State + 'static, D: 'static, A: 'static> Default for CatchHandler<S, D, A> {
    fn default() -> Self {
        Self::rethrow()
    }
}

impl<S: State, D, A> Clone for CatchHandler<S, D, A> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
        }
    }
}
