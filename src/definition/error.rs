//! Definition error types.

use thiserror::Error;

/// Errors that can occur while loading or resolving a rule definition
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// One or more rules name a transition the registry does not know.
    /// Every unknown name is reported, not just the first.
    #[error("Unknown transitions: {}", .0.join(", "))]
    UnknownTransitions(Vec<String>),

    /// A different handle is already registered under this name
    #[error("Transition name '{0}' is already registered to a different handle")]
    DuplicateName(String),

    /// The definition is not valid JSON for this state type
    #[error("Malformed definition: {0}")]
    Malformed(#[from] serde_json::Error),
}
