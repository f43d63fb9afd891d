//! Stateful: a rule-table state machine engine
//!
//! The engine validates and executes state changes on behalf of an entity it
//! does not own. The entity exposes its current state and accepts a new one;
//! the engine holds a table of rules saying which transitions may run from
//! which states and where they may land.
//!
//! # Core Concepts
//!
//! - **State**: any comparable value implementing the `State` trait
//! - **StateSet**: the states a rule accepts, possibly including the wildcard
//! - **Transition**: named logic computing a candidate state from arguments
//! - **StateMachine**: binds the rule table to a `Stateful` entity
//!
//! # Example
//!
//! ```rust
//! use stateful::{StateMachine, StateSet, Stateful, Transition};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("storage error")]
//! struct StorageError;
//!
//! struct Article {
//!     status: String,
//! }
//!
//! impl Stateful for Article {
//!     type State = String;
//!     type Error = StorageError;
//!
//!     fn state(&self) -> String {
//!         self.status.clone()
//!     }
//!
//!     fn set_state(&mut self, state: String) -> Result<(), StorageError> {
//!         self.status = state;
//!         Ok(())
//!     }
//! }
//!
//! let publish = Transition::new("publish", |_: ()| Ok("published".to_string()));
//! let archive = Transition::new("archive", |_: ()| Ok("archived".to_string()));
//!
//! let mut article = Article { status: "draft".to_string() };
//! let mut machine = StateMachine::new(&mut article);
//! machine.add_transition(publish.clone(), vec!["draft".to_string()], vec!["published".to_string()]);
//! machine.add_transition(archive.clone(), StateSet::any(), vec!["archived".to_string()]);
//!
//! assert_eq!(machine.available_transitions(), vec![publish.clone(), archive.clone()]);
//!
//! machine.run(&publish, ()).unwrap();
//! assert_eq!(machine.available_transitions(), vec![archive]);
//!
//! let err = machine.run(&publish, ()).unwrap_err();
//! assert!(err.is_cannot_run());
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, RuleBuilder, StateMachineBuilder};
pub use crate::core::{State, StatePattern, StateSet, Transition, TransitionRule, TransitionRules};
pub use crate::definition::{DefinitionError, MachineDefinition, MachineDescription, TransitionRegistry};
pub use crate::machine::{RunError, StateMachine, Stateful};
