//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{State, StatePattern, StateSet, Transition, TransitionRule};

/// Builder for a single rule with a fluent API.
///
/// Sources and destinations accumulate; calling `.from` twice allows both
/// states.
pub struct RuleBuilder<S: State, A, E> {
    source: StateSet<S>,
    transition: Option<Transition<S, A, E>>,
    destination: StateSet<S>,
}

impl<S: State, A, E> RuleBuilder<S, A, E> {
    pub fn new() -> Self {
        Self {
            source: StateSet::empty(),
            transition: None,
            destination: StateSet::empty(),
        }
    }

    /// Allow running from `state`.
    pub fn from(mut self, state: impl Into<StatePattern<S>>) -> Self {
        self.source = self.source.with(state);
        self
    }

    /// Allow running from any state.
    pub fn from_any(self) -> Self {
        self.from(StatePattern::Any)
    }

    /// Allow landing in `state`.
    pub fn to(mut self, state: impl Into<StatePattern<S>>) -> Self {
        self.destination = self.destination.with(state);
        self
    }

    /// Allow landing in any state.
    pub fn to_any(self) -> Self {
        self.to(StatePattern::Any)
    }

    /// Set the transition handle (required).
    pub fn transition(mut self, transition: Transition<S, A, E>) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn build(self) -> Result<TransitionRule<S, A, E>, BuildError> {
        let transition = self.transition.ok_or(BuildError::MissingTransition)?;
        Ok(TransitionRule::new(self.source, transition, self.destination))
    }
}

impl<S: State, A, E> Default for RuleBuilder<S, A, E> {
    fn default() -> Self {
        Self::new()
    }
}
