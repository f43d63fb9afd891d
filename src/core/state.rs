//! Core State trait for state machine states.
//!
//! A state is an opaque, comparable value. The engine never interprets it
//! beyond equality and a display name used in errors and logs.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: States are read from the entity by value and carried in errors
/// - `PartialEq`: Rule matching is plain equality
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: Rule tables can be declared and described as data
///
/// `String` implements `State` out of the box. Enums usually get their
/// implementation from [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```rust
/// use stateful::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TicketState {
///     Open,
///     Closed,
/// }
///
/// impl State for TicketState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(TicketState::Open.name(), "Open");
/// assert_eq!("draft".to_string().name(), "draft");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
