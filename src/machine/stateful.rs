//! The capability a stateful entity exposes to the engine.

use crate::core::State;

/// An object that owns exactly one current state.
///
/// The engine reads the state through [`state`](Stateful::state) and writes
/// it back through [`set_state`](Stateful::set_state) only after a transition
/// has been fully validated.
///
/// `Error` is the domain error type shared by the entity and the transition
/// logic bound to it. Both kinds of failure reach the caller unchanged.
///
/// # Example
///
/// ```rust
/// use stateful::Stateful;
///
/// struct Article {
///     status: String,
/// }
///
/// impl Stateful for Article {
///     type State = String;
///     type Error = std::io::Error;
///
///     fn state(&self) -> String {
///         self.status.clone()
///     }
///
///     fn set_state(&mut self, state: String) -> Result<(), std::io::Error> {
///         self.status = state;
///         Ok(())
///     }
/// }
/// ```
pub trait Stateful {
    type State: State;
    type Error;

    /// Current state. Must be a cheap read without side effects.
    fn state(&self) -> Self::State;

    /// Commit a new state.
    fn set_state(&mut self, state: Self::State) -> Result<(), Self::Error>;
}

impl<T: Stateful + ?Sized> Stateful for &mut T {
    type State = T::State;
    type Error = T::Error;

    fn state(&self) -> Self::State {
        (**self).state()
    }

    fn set_state(&mut self, state: Self::State) -> Result<(), Self::Error> {
        (**self).set_state(state)
    }
}

impl<T: Stateful + ?Sized> Stateful for Box<T> {
    type State = T::State;
    type Error = T::Error;

    fn state(&self) -> Self::State {
        (**self).state()
    }

    fn set_state(&mut self, state: Self::State) -> Result<(), Self::Error> {
        (**self).set_state(state)
    }
}
