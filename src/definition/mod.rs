//! Declarative rule tables.
//!
//! Rules can be written as data and resolved against a
//! [`TransitionRegistry`] at setup time. Resolution uses Stillwater's
//! `Validation` so that every unknown transition name is reported at once.
//!
//! # Example
//!
//! ```rust
//! use stateful::core::Transition;
//! use stateful::definition::{MachineDefinition, TransitionRegistry};
//!
//! let json = r#"{
//!     "rules": [
//!         { "transition": "publish", "from": [{ "is": "draft" }], "to": [{ "is": "published" }] },
//!         { "transition": "archive", "from": ["any"], "to": [{ "is": "archived" }] }
//!     ]
//! }"#;
//!
//! let definition: MachineDefinition<String> = MachineDefinition::from_json(json).unwrap();
//!
//! let registry = TransitionRegistry::new()
//!     .with(Transition::<String, (), String>::new("publish", |_| Ok("published".into())))
//!     .unwrap()
//!     .with(Transition::new("archive", |_| Ok("archived".into())))
//!     .unwrap();
//!
//! let rules = definition.resolve(&registry).unwrap();
//! assert_eq!(rules.len(), 2);
//! ```

pub mod error;
pub mod registry;

pub use error::DefinitionError;
pub use registry::TransitionRegistry;

use crate::core::{State, StateSet, TransitionRule, TransitionRules};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// One rule, with the transition referred to by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RuleDefinition<S: State> {
    pub transition: String,
    #[serde(default)]
    pub from: StateSet<S>,
    #[serde(default)]
    pub to: StateSet<S>,
}

/// An ordered list of rule definitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineDefinition<S: State> {
    pub rules: Vec<RuleDefinition<S>>,
}

impl<S: State> MachineDefinition<S> {
    pub fn new(rules: Vec<RuleDefinition<S>>) -> Self {
        Self { rules }
    }

    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve every rule against `registry`, keeping definition order.
    ///
    /// Fails with all unknown transition names, deduplicated in the order
    /// they first appear.
    pub fn resolve<A, E>(
        &self,
        registry: &TransitionRegistry<S, A, E>,
    ) -> Result<TransitionRules<S, A, E>, DefinitionError> {
        let checks: Vec<Validation<TransitionRule<S, A, E>, NonEmptyVec<String>>> = self
            .rules
            .iter()
            .map(|rule| match registry.get(&rule.transition) {
                Some(transition) => Validation::success(TransitionRule::new(
                    rule.from.clone(),
                    transition.clone(),
                    rule.to.clone(),
                )),
                None => Validation::fail(rule.transition.clone()),
            })
            .collect();

        match Validation::all_vec(checks) {
            Validation::Success(rules) => Ok(rules.into_iter().collect()),
            Validation::Failure(unknown) => {
                let mut names: Vec<String> = Vec::new();
                for name in unknown.iter() {
                    if !names.contains(name) {
                        names.push(name.clone());
                    }
                }
                Err(DefinitionError::UnknownTransitions(names))
            }
        }
    }
}

impl<S: State> Default for MachineDefinition<S> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<S: State, A, E> From<&TransitionRules<S, A, E>> for MachineDefinition<S> {
    fn from(rules: &TransitionRules<S, A, E>) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|rule| RuleDefinition {
                    transition: rule.transition().name().to_string(),
                    from: rule.source().clone(),
                    to: rule.destination().clone(),
                })
                .collect(),
        }
    }
}

/// Serializable overview of a machine: its states, rules and the states
/// with no way out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineDescription<S: State> {
    pub current: S,
    pub states: Vec<S>,
    pub terminal_states: Vec<S>,
    pub rules: Vec<RuleDefinition<S>>,
}

impl<S: State> MachineDescription<S> {
    pub fn to_json_pretty(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StatePattern, Transition};

    type Step = Transition<String, (), String>;

    fn step(name: &'static str, target: &'static str) -> Step {
        Transition::new(name, move |_| Ok(target.to_string()))
    }

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn parses_wildcards_and_concrete_states() {
        let json = r#"{
            "rules": [
                { "transition": "reset", "from": ["any"], "to": [{ "is": "draft" }] }
            ]
        }"#;

        let definition: MachineDefinition<String> = MachineDefinition::from_json(json).unwrap();

        let rule = &definition.rules[0];
        assert_eq!(rule.transition, "reset");
        assert_eq!(rule.from, StateSet::from(StatePattern::Any));
        assert_eq!(rule.to, StateSet::of([s("draft")]));
    }

    #[test]
    fn missing_sets_default_to_empty() {
        let json = r#"{ "rules": [{ "transition": "noop" }] }"#;
        let definition: MachineDefinition<String> = MachineDefinition::from_json(json).unwrap();

        assert!(definition.rules[0].from.is_empty());
        assert!(definition.rules[0].to.is_empty());
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = MachineDefinition::<String>::from_json("{ not json");
        assert!(matches!(result, Err(DefinitionError::Malformed(_))));
    }

    #[test]
    fn resolve_keeps_definition_order_and_handles() {
        let publish = step("publish", "published");
        let archive = step("archive", "archived");
        let registry = TransitionRegistry::new()
            .with(archive.clone())
            .unwrap()
            .with(publish.clone())
            .unwrap();

        let definition = MachineDefinition::new(vec![
            RuleDefinition {
                transition: s("publish"),
                from: StateSet::of([s("draft")]),
                to: StateSet::of([s("published")]),
            },
            RuleDefinition {
                transition: s("archive"),
                from: StateSet::any(),
                to: StateSet::of([s("archived")]),
            },
        ]);

        let rules = definition.resolve(&registry).unwrap();
        assert_eq!(rules.transitions(), vec![publish.clone(), archive]);
        assert!(rules.find(&publish).is_some());
    }

    #[test]
    fn resolve_reports_every_unknown_transition() {
        let registry = TransitionRegistry::new()
            .with(step("publish", "published"))
            .unwrap();

        let definition = MachineDefinition::new(vec![
            RuleDefinition {
                transition: s("archive"),
                from: StateSet::any(),
                to: StateSet::of([s("archived")]),
            },
            RuleDefinition {
                transition: s("publish"),
                from: StateSet::of([s("draft")]),
                to: StateSet::of([s("published")]),
            },
            RuleDefinition {
                transition: s("unpublish"),
                from: StateSet::of([s("published")]),
                to: StateSet::of([s("draft")]),
            },
            RuleDefinition {
                transition: s("archive"),
                from: StateSet::of([s("draft")]),
                to: StateSet::of([s("archived")]),
            },
        ]);

        match definition.resolve(&registry) {
            Err(DefinitionError::UnknownTransitions(names)) => {
                assert_eq!(names, vec![s("archive"), s("unpublish")]);
            }
            other => panic!("Expected unknown transitions, got {other:?}"),
        }
    }

    #[test]
    fn resolve_builds_one_rule_per_definition_entry() {
        let publish = step("publish", "published");
        let registry = TransitionRegistry::new().with(publish.clone()).unwrap();
        let definition = MachineDefinition::new(vec![
            RuleDefinition {
                transition: s("publish"),
                from: StateSet::of([s("draft")]),
                to: StateSet::of([s("published")]),
            },
            RuleDefinition {
                transition: s("publish"),
                from: StateSet::of([s("review")]),
                to: StateSet::any(),
            },
        ]);

        let rules = definition.resolve(&registry).unwrap();
        assert_eq!(rules.transitions(), vec![publish.clone(), publish.clone()]);

        let sources: Vec<&StateSet<String>> = rules.iter().map(|rule| rule.source()).collect();
        assert_eq!(
            sources,
            vec![&StateSet::of([s("draft")]), &StateSet::of([s("review")])]
        );
        assert_eq!(
            rules.find(&publish).unwrap().destination(),
            &StateSet::of([s("published")])
        );
    }

    #[test]
    fn definition_roundtrips_through_rule_table() {
        let registry = TransitionRegistry::new()
            .with(step("publish", "published"))
            .unwrap();
        let definition = MachineDefinition::new(vec![RuleDefinition {
            transition: s("publish"),
            from: StateSet::of([s("draft")]).with(StatePattern::Any),
            to: StateSet::of([s("published")]),
        }]);

        let rules = definition.resolve(&registry).unwrap();
        assert_eq!(MachineDefinition::from(&rules), definition);

        let json = definition.to_json_pretty().unwrap();
        assert_eq!(MachineDefinition::from_json(&json).unwrap(), definition);
    }
}
