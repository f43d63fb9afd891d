//! State patterns and state sets.
//!
//! A rule never lists bare states. It lists patterns, where a pattern is
//! either a concrete state or the wildcard. `StateSet::allows` is the one
//! predicate used for both source and destination checks.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry of a [`StateSet`]: a concrete state or the wildcard.
///
/// Serialized as `"any"` for the wildcard and `{"is": <state>}` otherwise.
///
/// # Example
///
/// ```rust
/// use stateful::core::StatePattern;
///
/// let draft = StatePattern::Is("draft".to_string());
/// assert!(draft.matches(&"draft".to_string()));
/// assert!(!draft.matches(&"published".to_string()));
///
/// let any: StatePattern<String> = StatePattern::Any;
/// assert!(any.matches(&"published".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", bound = "")]
pub enum StatePattern<S: State> {
    /// Matches every concrete state.
    Any,
    /// Matches exactly this state.
    Is(S),
}

impl<S: State> StatePattern<S> {
    pub fn matches(&self, candidate: &S) -> bool {
        match self {
            Self::Any => true,
            Self::Is(state) => state == candidate,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// The concrete state, or `None` for the wildcard.
    pub fn as_state(&self) -> Option<&S> {
        match self {
            Self::Any => None,
            Self::Is(state) => Some(state),
        }
    }
}

impl<S: State> From<S> for StatePattern<S> {
    fn from(state: S) -> Self {
        Self::Is(state)
    }
}

impl<S: State> fmt::Display for StatePattern<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Is(state) => f.write_str(state.name()),
        }
    }
}

/// Ordered collection of state patterns.
///
/// Duplicates are kept as given; membership is tested per entry, so they
/// have no effect on matching.
///
/// # Example
///
/// ```rust
/// use stateful::core::StateSet;
///
/// let sources = StateSet::of(["draft".to_string(), "review".to_string()]);
/// assert!(sources.allows(&"review".to_string()));
/// assert!(!sources.allows(&"archived".to_string()));
///
/// let anywhere: StateSet<String> = StateSet::any();
/// assert!(anywhere.allows(&"archived".to_string()));
///
/// let nowhere: StateSet<String> = StateSet::empty();
/// assert!(!nowhere.allows(&"draft".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct StateSet<S: State> {
    patterns: Vec<StatePattern<S>>,
}

impl<S: State> StateSet<S> {
    /// A set that allows nothing.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// A set holding only the wildcard.
    pub fn any() -> Self {
        Self {
            patterns: vec![StatePattern::Any],
        }
    }

    /// A set of concrete states.
    pub fn of<I>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        states.into_iter().collect()
    }

    /// Append a pattern, returning the extended set.
    pub fn with(mut self, pattern: impl Into<StatePattern<S>>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Wildcard-aware membership: true if `candidate` is listed or the set
    /// contains [`StatePattern::Any`].
    pub fn allows(&self, candidate: &S) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(candidate))
    }

    pub fn has_wildcard(&self) -> bool {
        self.patterns.iter().any(StatePattern::is_wildcard)
    }

    /// Concrete states in declaration order, wildcard skipped.
    pub fn concrete(&self) -> impl Iterator<Item = &S> + '_ {
        self.patterns.iter().filter_map(StatePattern::as_state)
    }

    pub fn patterns(&self) -> &[StatePattern<S>] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<S: State> Default for StateSet<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: State> FromIterator<S> for StateSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().map(StatePattern::Is).collect(),
        }
    }
}

impl<S: State> FromIterator<StatePattern<S>> for StateSet<S> {
    fn from_iter<I: IntoIterator<Item = StatePattern<S>>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

impl<S: State> From<Vec<S>> for StateSet<S> {
    fn from(states: Vec<S>) -> Self {
        states.into_iter().collect()
    }
}

impl<S: State> From<Vec<StatePattern<S>>> for StateSet<S> {
    fn from(patterns: Vec<StatePattern<S>>) -> Self {
        Self { patterns }
    }
}

impl<S: State> From<StatePattern<S>> for StateSet<S> {
    fn from(pattern: StatePattern<S>) -> Self {
        Self {
            patterns: vec![pattern],
        }
    }
}

impl<S: State> fmt::Display for StateSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{pattern}")?;
        }
        f.write_str("]")
    }
}
