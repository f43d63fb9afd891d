//! The engine: a rule table bound to one stateful entity.
//!
//! - **Stateful**: the capability an entity exposes (read and commit state)
//! - **StateMachine**: registers rules, runs transitions, answers queries
//! - **RunError**: why a run did not commit
//!
//! The engine is synchronous and keeps no locks. Callers sharing a machine
//! across threads or tasks serialize access themselves.

mod error;
#[allow(clippy::module_inception)]
mod machine;
mod stateful;

pub use error::RunError;
pub use machine::{EntityRules, EntityRunError, EntityTransition, StateMachine};
pub use stateful::Stateful;
