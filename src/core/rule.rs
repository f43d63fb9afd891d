//! Transition rules and the rule table.

use super::pattern::StateSet;
use super::state::State;
use super::transition::Transition;
use std::fmt;

/// Declaration that `transition` may run from any state in `source` and
/// must land in a state allowed by `destination`.
///
/// Rules are immutable once created.
pub struct TransitionRule<S: State, A, E> {
    source: StateSet<S>,
    transition: Transition<S, A, E>,
    destination: StateSet<S>,
}

impl<S: State, A, E> TransitionRule<S, A, E> {
    pub fn new(
        source: impl Into<StateSet<S>>,
        transition: Transition<S, A, E>,
        destination: impl Into<StateSet<S>>,
    ) -> Self {
        Self {
            source: source.into(),
            transition,
            destination: destination.into(),
        }
    }

    pub fn source(&self) -> &StateSet<S> {
        &self.source
    }

    pub fn transition(&self) -> &Transition<S, A, E> {
        &self.transition
    }

    pub fn destination(&self) -> &StateSet<S> {
        &self.destination
    }

    /// Check whether the rule's transition may start from `current`.
    pub fn is_allowed_to_run(&self, current: &S) -> bool {
        self.source.allows(current)
    }

    /// Check whether the rule accepts `candidate` as the new state.
    pub fn is_allowed_to_transfer(&self, candidate: &S) -> bool {
        self.destination.allows(candidate)
    }
}

impl<S: State, A, E> Clone for TransitionRule<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            transition: self.transition.clone(),
            destination: self.destination.clone(),
        }
    }
}

impl<S: State, A, E> fmt::Debug for TransitionRule<S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRule")
            .field("source", &self.source)
            .field("transition", &self.transition)
            .field("destination", &self.destination)
            .finish()
    }
}

/// Append-only, ordered table of transition rules.
///
/// Lookups scan in insertion order and the first match wins, so a second
/// rule for the same transition handle is never consulted.
///
/// # Example
///
/// ```rust
/// use stateful::core::{StateSet, Transition, TransitionRule, TransitionRules};
///
/// let archive: Transition<String, (), String> =
///     Transition::new("archive", |_| Ok("archived".to_string()));
///
/// let mut rules = TransitionRules::new();
/// rules.add(TransitionRule::new(
///     StateSet::any(),
///     archive.clone(),
///     vec!["archived".to_string(), "deleted".to_string()],
/// ));
///
/// assert!(rules.find(&archive).is_some());
/// assert_eq!(rules.all_states(), vec!["archived".to_string(), "deleted".to_string()]);
/// ```
pub struct TransitionRules<S: State, A, E> {
    rules: Vec<TransitionRule<S, A, E>>,
}

impl<S: State, A, E> TransitionRules<S, A, E> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Duplicate transitions are accepted.
    pub fn add(&mut self, rule: TransitionRule<S, A, E>) {
        self.rules.push(rule);
    }

    /// First rule registered for `transition`, by handle identity.
    pub fn find(&self, transition: &Transition<S, A, E>) -> Option<&TransitionRule<S, A, E>> {
        self.rules
            .iter()
            .find(|rule| rule.transition.same_as(transition))
    }

    /// Every concrete state named by any rule, deduplicated in first-seen
    /// order. The wildcard is never included.
    pub fn all_states(&self) -> Vec<S> {
        let mut states: Vec<S> = Vec::new();
        for rule in &self.rules {
            for state in rule.source.concrete().chain(rule.destination.concrete()) {
                if !states.contains(state) {
                    states.push(state.clone());
                }
            }
        }
        states
    }

    /// Transition handles in table order.
    pub fn transitions(&self) -> Vec<Transition<S, A, E>> {
        self.rules
            .iter()
            .map(|rule| rule.transition.clone())
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransitionRule<S, A, E>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S: State, A, E> Default for TransitionRules<S, A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A, E> Clone for TransitionRules<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<S: State, A, E> fmt::Debug for TransitionRules<S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.rules).finish()
    }
}

impl<S: State, A, E> Extend<TransitionRule<S, A, E>> for TransitionRules<S, A, E> {
    fn extend<I: IntoIterator<Item = TransitionRule<S, A, E>>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<S: State, A, E> FromIterator<TransitionRule<S, A, E>> for TransitionRules<S, A, E> {
    fn from_iter<I: IntoIterator<Item = TransitionRule<S, A, E>>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a, S: State, A, E> IntoIterator for &'a TransitionRules<S, A, E> {
    type Item = &'a TransitionRule<S, A, E>;
    type IntoIter = std::slice::Iter<'a, TransitionRule<S, A, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
