//! Name-to-handle registry used to resolve declarative rules.

use crate::core::{State, Transition};
use crate::definition::error::DefinitionError;

/// Lookup table from transition names to handles.
///
/// Definitions refer to transitions by name; the registry is where those
/// names get their identity back.
pub struct TransitionRegistry<S: State, A, E> {
    entries: Vec<Transition<S, A, E>>,
}

impl<S: State, A, E> TransitionRegistry<S, A, E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a handle under its own name.
    ///
    /// Registering the same handle twice is a no-op. A different handle with
    /// a name already in use is rejected.
    pub fn register(&mut self, transition: Transition<S, A, E>) -> Result<(), DefinitionError> {
        match self.get(transition.name()) {
            Some(existing) if existing.same_as(&transition) => Ok(()),
            Some(_) => Err(DefinitionError::DuplicateName(
                transition.name().to_string(),
            )),
            None => {
                self.entries.push(transition);
                Ok(())
            }
        }
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, transition: Transition<S, A, E>) -> Result<Self, DefinitionError> {
        self.register(transition)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Transition<S, A, E>> {
        self.entries.iter().find(|t| t.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(Transition::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: State, A, E> Default for TransitionRegistry<S, A, E> {
    fn default() -> Self {
        Self::new()
    }
}
