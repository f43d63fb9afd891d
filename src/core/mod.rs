//! Core state machine types.
//!
//! This module contains the building blocks the engine validates against:
//! - States via the `State` trait
//! - Wildcard-aware state sets (`StatePattern`, `StateSet`)
//! - Transition handles and the rule table
//!
//! Nothing in this module touches a stateful entity; it is all pure data
//! and lookups.

mod pattern;
mod rule;
mod state;
mod transition;

pub use pattern::{StatePattern, StateSet};
pub use rule::{TransitionRule, TransitionRules};
pub use state::State;
pub use transition::{Transition, TransitionFn};
