//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for declaring rule
//! tables with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod rule;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use rule::RuleBuilder;

use crate::core::{State, Transition};

/// Create a transition that always lands in `to`.
///
/// Useful for rules whose only logic is the state change itself.
///
/// # Example
///
/// ```
/// use stateful::builder::fixed_transition;
/// use stateful::core::Transition;
///
/// let close: Transition<String, (), std::convert::Infallible> =
///     fixed_transition("close", "closed".to_string());
/// assert_eq!(close.call(()), Ok("closed".to_string()));
/// ```
pub fn fixed_transition<S, A, E>(name: impl Into<String>, to: S) -> Transition<S, A, E>
where
    S: State + 'static,
    A: 'static,
    E: 'static,
{
    Transition::new(name, move |_| Ok(to.clone()))
}
