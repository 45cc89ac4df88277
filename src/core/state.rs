//! State identifiers for stepped records.
//!
//! A state is a plain value naming which handler runs next. Enumerated
//! states are the usual choice; `String` is supported for tables keyed by
//! name at runtime.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Name of the default state for string-keyed records.
pub const START: &str = "Start";

/// Trait for state identifiers.
///
/// Handlers are looked up by comparing states with `PartialEq`, and the
/// name is what error messages and logs report.
///
/// # Example
///
/// ```rust
/// use stepwise::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Fetch,
///     Parse,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Fetch => "Fetch",
///             Self::Parse => "Parse",
///         }
///     }
/// }
///
/// assert_eq!(Phase::Parse.name(), "Parse");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// An empty name is never assigned by the step engine.
    fn name(&self) -> &str;
}

/// States that have a designated starting point.
///
/// Used by [`make_state`](crate::core::make_state) to fill in the default
/// `state` of a fresh record.
pub trait Initial: State {
    fn initial() -> Self;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl Initial for String {
    fn initial() -> Self {
        START.to_string()
    }
}
