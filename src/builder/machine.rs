//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::rule::RuleBuilder;
use crate::core::{StateSet, TransitionRule, TransitionRules};
use crate::definition::{MachineDefinition, TransitionRegistry};
use crate::machine::{EntityRules, EntityTransition, StateMachine, Stateful};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```
/// use stateful::builder::StateMachineBuilder;
/// use stateful::{state_enum, Stateful, Transition};
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// struct Signal(Light);
///
/// impl Stateful for Signal {
///     type State = Light;
///     type Error = std::convert::Infallible;
///
///     fn state(&self) -> Light {
///         self.0
///     }
///
///     fn set_state(&mut self, state: Light) -> Result<(), Self::Error> {
///         self.0 = state;
///         Ok(())
///     }
/// }
///
/// let go = Transition::new("go", |_: ()| Ok(Light::Green));
/// let stop = Transition::new("stop", |_: ()| Ok(Light::Red));
///
/// let mut machine = StateMachineBuilder::new()
///     .bind(Signal(Light::Red))
///     .rule(go.clone(), vec![Light::Red], vec![Light::Green])
///     .rule(stop.clone(), vec![Light::Green], vec![Light::Red])
///     .build()
///     .unwrap();
///
/// machine.run(&go, ()).unwrap();
/// assert_eq!(machine.current_state(), Light::Green);
/// assert_eq!(machine.available_transitions(), vec![stop]);
/// ```
pub struct StateMachineBuilder<E: Stateful, A> {
    entity: Option<E>,
    rules: EntityRules<E, A>,
}

impl<E: Stateful, A> StateMachineBuilder<E, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entity: None,
            rules: TransitionRules::new(),
        }
    }

    /// Set the entity the machine manages (required).
    pub fn bind(mut self, entity: E) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Add a rule from its parts.
    pub fn rule(
        mut self,
        transition: EntityTransition<E, A>,
        source: impl Into<StateSet<E::State>>,
        destination: impl Into<StateSet<E::State>>,
    ) -> Self {
        self.rules
            .add(TransitionRule::new(source, transition, destination));
        self
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn rule_with(
        mut self,
        builder: RuleBuilder<E::State, A, E::Error>,
    ) -> Result<Self, BuildError> {
        self.rules.add(builder.build()?);
        Ok(self)
    }

    /// Add multiple pre-built rules at once.
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = TransitionRule<E::State, A, E::Error>>,
    {
        self.rules.extend(rules);
        self
    }

    /// Append the rules of a declarative definition, resolved against
    /// `registry`.
    pub fn definition(
        self,
        definition: &MachineDefinition<E::State>,
        registry: &TransitionRegistry<E::State, A, E::Error>,
    ) -> Result<Self, BuildError> {
        let resolved = definition.resolve(registry)?;
        Ok(self.rules(resolved.iter().cloned()))
    }

    /// Build the state machine.
    /// Returns an error if no entity was bound. An empty rule table is
    /// allowed.
    pub fn build(self) -> Result<StateMachine<E, A>, BuildError> {
        let entity = self.entity.ok_or(BuildError::MissingEntity)?;
        Ok(StateMachine::with_rules(entity, self.rules))
    }
}

impl<E: Stateful, A> Default for StateMachineBuilder<E, A> {
    fn default() -> Self {
        Self::new()
    }
}
