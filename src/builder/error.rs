//! Build errors for state machine and rule builders.

use crate::definition::DefinitionError;
use thiserror::Error;

/// Errors that can occur when building state machines and rules.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No entity bound. Call .bind(entity) before .build()")]
    MissingEntity,

    #[error("Rule transition not specified. Call .transition(handle)")]
    MissingTransition,

    #[error(transparent)]
    Definition(#[from] DefinitionError),
}
