//! Transition handles.
//!
//! A transition is named domain logic that turns arguments into a candidate
//! state. Rules refer to a transition by handle identity, not by name.

use super::state::State;
use std::fmt;
use std::sync::Arc;

/// Type alias for transition logic.
pub type TransitionFn<S, A, E> = Arc<dyn Fn(A) -> Result<S, E> + Send + Sync>;

/// Shared handle to a unit of transition logic.
///
/// Cloning a handle yields the same transition. Two handles created by
/// separate calls to [`Transition::new`] are different transitions, even
/// if they carry the same name and behave identically.
///
/// # Example
///
/// ```rust
/// use stateful::core::Transition;
///
/// let publish: Transition<String, (), std::convert::Infallible> =
///     Transition::new("publish", |_| Ok("published".to_string()));
///
/// let same = publish.clone();
/// assert_eq!(publish, same);
///
/// let lookalike: Transition<String, (), std::convert::Infallible> =
///     Transition::new("publish", |_| Ok("published".to_string()));
/// assert_ne!(publish, lookalike);
/// ```
pub struct Transition<S: State, A, E> {
    name: Arc<str>,
    action: TransitionFn<S, A, E>,
}

impl<S: State, A, E> Transition<S, A, E> {
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn(A) -> Result<S, E> + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            action: Arc::new(action),
        }
    }

    /// Name used in errors, logs and rule definitions.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the transition logic.
    pub fn call(&self, args: A) -> Result<S, E> {
        (self.action)(args)
    }

    /// Handle identity.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.action, &other.action)
    }
}

impl<S: State, A, E> Clone for Transition<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            action: Arc::clone(&self.action),
        }
    }
}

impl<S: State, A, E> PartialEq for Transition<S, A, E> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<S: State, A, E> Eq for Transition<S, A, E> {}

impl<S: State, A, E> fmt::Debug for Transition<S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
