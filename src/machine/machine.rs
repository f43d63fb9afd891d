//! State machine bound to one stateful entity.

use crate::core::{State, StateSet, Transition, TransitionRule, TransitionRules};
use crate::definition::{MachineDefinition, MachineDescription};
use crate::machine::error::RunError;
use crate::machine::stateful::Stateful;
use tracing::{debug, debug_span, info};

/// Transition handle whose state and error types match entity `E`.
pub type EntityTransition<E, A> =
    Transition<<E as Stateful>::State, A, <E as Stateful>::Error>;

/// Rule table type for entity `E`.
pub type EntityRules<E, A> = TransitionRules<<E as Stateful>::State, A, <E as Stateful>::Error>;

/// Error type of [`StateMachine::run`] for entity `E`.
pub type EntityRunError<E> = RunError<<E as Stateful>::State, <E as Stateful>::Error>;

/// Validates and commits state changes on behalf of a stateful entity.
///
/// `E` is the entity binding. It can be the entity itself, a `&mut` to it,
/// or a `Box`. `A` is the argument type every transition on this machine
/// accepts.
///
/// # Example
///
/// ```rust
/// use stateful::{StateMachine, Stateful, Transition};
///
/// struct Post {
///     status: String,
/// }
///
/// impl Stateful for Post {
///     type State = String;
///     type Error = std::convert::Infallible;
///
///     fn state(&self) -> String {
///         self.status.clone()
///     }
///
///     fn set_state(&mut self, state: String) -> Result<(), Self::Error> {
///         self.status = state;
///         Ok(())
///     }
/// }
///
/// let publish = Transition::new("publish", |_: ()| Ok("published".to_string()));
///
/// let mut post = Post { status: "draft".to_string() };
/// let mut machine = StateMachine::new(&mut post);
/// machine.add_transition(publish.clone(), vec!["draft".to_string()], vec!["published".to_string()]);
///
/// machine.run(&publish, ()).unwrap();
/// assert_eq!(machine.current_state(), "published");
///
/// let err = machine.run(&publish, ()).unwrap_err();
/// assert!(err.is_cannot_run());
/// ```
pub struct StateMachine<E: Stateful, A> {
    entity: E,
    rules: EntityRules<E, A>,
}

impl<E: Stateful, A> StateMachine<E, A> {
    /// Bind an empty rule table to `entity`.
    pub fn new(entity: E) -> Self {
        Self {
            entity,
            rules: TransitionRules::new(),
        }
    }

    /// Bind an existing rule table to `entity`.
    pub fn with_rules(entity: E, rules: EntityRules<E, A>) -> Self {
        Self { entity, rules }
    }

    /// Register a rule for `transition`.
    ///
    /// Nothing is validated here. An empty source set makes the transition
    /// unrunnable, and a second rule for the same handle is never consulted.
    pub fn add_transition(
        &mut self,
        transition: EntityTransition<E, A>,
        source: impl Into<StateSet<E::State>>,
        destination: impl Into<StateSet<E::State>>,
    ) {
        let rule = TransitionRule::new(source, transition, destination);
        debug!(
            transition = rule.transition().name(),
            source = %rule.source(),
            destination = %rule.destination(),
            "registered transition rule"
        );
        self.rules.add(rule);
    }

    pub fn transition_rules(&self) -> &EntityRules<E, A> {
        &self.rules
    }

    /// All concrete states referenced by any rule, wildcard excluded.
    pub fn all_states(&self) -> Vec<E::State> {
        self.rules.all_states()
    }

    /// The entity's current state.
    pub fn current_state(&self) -> E::State {
        self.entity.state()
    }

    /// Run `transition` with `args`.
    ///
    /// Steps, each aborting the run on failure:
    /// 1. find the first rule for the handle
    /// 2. check the current state against the rule's sources
    /// 3. call the transition logic
    /// 4. check the returned state against the rule's destinations
    /// 5. commit it to the entity
    ///
    /// The entity is only written in step 5. Side effects performed by the
    /// transition logic in step 3 are not undone when step 4 fails.
    pub fn run(
        &mut self,
        transition: &EntityTransition<E, A>,
        args: A,
    ) -> Result<(), EntityRunError<E>> {
        let span = debug_span!("state_machine.run", transition = transition.name());
        let _enter = span.enter();

        let Some(rule) = self.rules.find(transition) else {
            debug!("no rule registered for transition");
            return Err(RunError::TransitionRuleNotFound {
                transition: transition.name().to_string(),
            });
        };

        let current = self.entity.state();
        if !rule.is_allowed_to_run(&current) {
            debug!(
                current = current.name(),
                allowed = %rule.source(),
                "transition not allowed from current state"
            );
            return Err(RunError::CannotRunFromState {
                transition: transition.name().to_string(),
                current,
                allowed: rule.source().clone(),
            });
        }

        let next = match transition.call(args) {
            Ok(next) => next,
            Err(err) => {
                debug!(current = current.name(), "transition logic failed");
                return Err(RunError::Transition(err));
            }
        };

        if !rule.is_allowed_to_transfer(&next) {
            debug!(
                candidate = next.name(),
                allowed = %rule.destination(),
                "transition produced a state outside its destinations"
            );
            return Err(RunError::CannotTransferToState {
                transition: transition.name().to_string(),
                state: next,
                allowed: rule.destination().clone(),
            });
        }

        if let Err(err) = self.entity.set_state(next.clone()) {
            debug!(candidate = next.name(), "entity failed to commit state");
            return Err(RunError::Commit(err));
        }

        info!(from = current.name(), to = next.name(), "state committed");
        Ok(())
    }

    /// Whether `transition` has a rule that allows the current state.
    pub fn can_run(&self, transition: &EntityTransition<E, A>) -> bool {
        self.rules
            .find(transition)
            .is_some_and(|rule| rule.is_allowed_to_run(&self.entity.state()))
    }

    /// Transitions whose rule allows the current state, in table order.
    ///
    /// Every matching rule contributes, so a handle registered under several
    /// rules can appear more than once.
    pub fn available_transitions(&self) -> Vec<EntityTransition<E, A>> {
        let current = self.entity.state();
        self.rules
            .iter()
            .filter(|rule| rule.is_allowed_to_run(&current))
            .map(|rule| rule.transition().clone())
            .collect()
    }

    /// Concrete states no rule can leave.
    ///
    /// A wildcard-sourced rule leaves every state, so any such rule makes
    /// this empty.
    pub fn terminal_states(&self) -> Vec<E::State> {
        self.rules
            .all_states()
            .into_iter()
            .filter(|state| !self.rules.iter().any(|rule| rule.is_allowed_to_run(state)))
            .collect()
    }

    /// The rule table as a serializable definition.
    pub fn definition(&self) -> MachineDefinition<E::State> {
        MachineDefinition::from(&self.rules)
    }

    /// Snapshot of the machine for documentation and introspection.
    pub fn describe(&self) -> MachineDescription<E::State> {
        MachineDescription {
            current: self.entity.state(),
            states: self.all_states(),
            terminal_states: self.terminal_states(),
            rules: self.definition().rules,
        }
    }

    pub fn entity(&self) -> &E {
        &self.entity
    }

    /// Mutable access to the bound entity. Writes made here bypass rule
    /// validation.
    pub fn entity_mut(&mut self) -> &mut E {
        &mut self.entity
    }

    /// Release the entity binding.
    pub fn into_entity(self) -> E {
        self.entity
    }
}
