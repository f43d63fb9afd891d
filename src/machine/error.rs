//! Errors returned by [`StateMachine::run`](crate::StateMachine::run).

use crate::core::{State, StateSet};
use thiserror::Error;

/// Why a run did not commit a new state.
///
/// Engine-detected failures carry the offending values. Failures raised by
/// the transition logic or by the entity's commit are carried unchanged in
/// [`Transition`](RunError::Transition) and [`Commit`](RunError::Commit),
/// which display and report sources exactly as the domain error does.
#[derive(Debug, Error)]
pub enum RunError<S: State, E> {
    /// No rule references the transition handle. A configuration error.
    #[error("No transition rule registered for '{transition}'")]
    TransitionRuleNotFound { transition: String },

    /// The current state is not an allowed source for the rule.
    #[error(
        "Transition '{transition}' cannot run from state '{}' (allowed: {allowed})",
        .current.name()
    )]
    CannotRunFromState {
        transition: String,
        current: S,
        allowed: StateSet<S>,
    },

    /// The transition logic produced a state the rule does not accept.
    #[error(
        "Transition '{transition}' cannot transfer to state '{}' (allowed: {allowed})",
        .state.name()
    )]
    CannotTransferToState {
        transition: String,
        state: S,
        allowed: StateSet<S>,
    },

    /// The transition logic itself failed.
    #[error(transparent)]
    Transition(E),

    /// The entity refused the new state.
    #[error(transparent)]
    Commit(E),
}

impl<S: State, E> RunError<S, E> {
    pub fn is_rule_not_found(&self) -> bool {
        matches!(self, Self::TransitionRuleNotFound { .. })
    }

    pub fn is_cannot_run(&self) -> bool {
        matches!(self, Self::CannotRunFromState { .. })
    }

    pub fn is_cannot_transfer(&self) -> bool {
        matches!(self, Self::CannotTransferToState { .. })
    }

    /// The domain error from the transition logic or the commit, if that is
    /// what failed.
    pub fn into_domain_error(self) -> Option<E> {
        match self {
            Self::Transition(err) | Self::Commit(err) => Some(err),
            _ => None,
        }
    }
}
