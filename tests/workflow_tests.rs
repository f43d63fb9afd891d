//! End-to-end workflows against an entity with observable side effects.

use stateful::builder::StateMachineBuilder;
use stateful::definition::{MachineDefinition, TransitionRegistry};
use stateful::{RunError, StateMachine, StateSet, Stateful, Transition};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
enum ArticleError {
    #[error("article has no body")]
    EmptyBody,
    #[error("store rejected write")]
    StoreRejected,
}

#[derive(Default)]
struct Article {
    status: String,
    writes: Vec<String>,
    read_only: bool,
}

impl Article {
    fn in_state(status: &str) -> Self {
        Self {
            status: status.to_string(),
            ..Default::default()
        }
    }
}

impl Stateful for Article {
    type State = String;
    type Error = ArticleError;

    fn state(&self) -> String {
        self.status.clone()
    }

    fn set_state(&mut self, state: String) -> Result<(), ArticleError> {
        if self.read_only {
            return Err(ArticleError::StoreRejected);
        }
        self.writes.push(state.clone());
        self.status = state;
        Ok(())
    }
}

#[derive(Clone)]
struct Draft {
    body: String,
}

type Step = Transition<String, Draft, ArticleError>;

fn s(name: &str) -> String {
    name.to_string()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("stateful=debug")
        .with_test_writer()
        .try_init();
}

fn publish() -> Step {
    Transition::new("publish", |draft: Draft| {
        if draft.body.trim().is_empty() {
            Err(ArticleError::EmptyBody)
        } else {
            Ok(s("published"))
        }
    })
}

fn sample() -> Draft {
    Draft {
        body: "Hello".to_string(),
    }
}

#[test]
fn draft_publishes_once() {
    init_tracing();
    let publish = publish();
    let mut article = Article::in_state("draft");
    let mut machine = StateMachine::new(&mut article);
    machine.add_transition(publish.clone(), vec![s("draft")], vec![s("published")]);

    machine.run(&publish, sample()).unwrap();
    assert_eq!(machine.current_state(), "published");

    let err = machine.run(&publish, sample()).unwrap_err();
    assert!(err.is_cannot_run());
    drop(machine);

    assert_eq!(article.writes, vec![s("published")]);
}

#[test]
fn unknown_transition_leaves_article_alone() {
    init_tracing();
    let unpublish: Step = Transition::new("unpublish", |_| Ok(s("draft")));
    let mut machine = StateMachine::new(Article::in_state("published"));
    machine.add_transition(publish(), vec![s("draft")], vec![s("published")]);

    let err = machine.run(&unpublish, sample()).unwrap_err();
    assert!(err.is_rule_not_found());
    assert!(machine.entity().writes.is_empty());
}

#[test]
fn logic_side_effects_are_not_rolled_back() {
    init_tracing();
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    let archive: Step = Transition::new("archive", move |_| {
        counted.fetch_add(1, Ordering::SeqCst);
        Ok(s("deleted"))
    });

    let mut machine = StateMachine::new(Article::in_state("published"));
    machine.add_transition(archive.clone(), vec![s("published")], vec![s("archived")]);

    let err = machine.run(&archive, sample()).unwrap_err();
    match err {
        RunError::CannotTransferToState { state, .. } => assert_eq!(state, "deleted"),
        other => panic!("Expected CannotTransferToState, got {other:?}"),
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(machine.current_state(), "published");
    assert!(machine.entity().writes.is_empty());
}

#[test]
fn source_check_happens_before_logic_runs() {
    init_tracing();
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    let retract: Step = Transition::new("retract", move |_| {
        counted.fetch_add(1, Ordering::SeqCst);
        Ok(s("draft"))
    });

    let mut machine = StateMachine::new(Article::in_state("draft"));
    machine.add_transition(retract.clone(), vec![s("published")], vec![s("draft")]);

    assert!(machine.run(&retract, sample()).unwrap_err().is_cannot_run());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn domain_errors_pass_through() {
    init_tracing();
    let publish = publish();
    let mut machine = StateMachine::new(Article::in_state("draft"));
    machine.add_transition(publish.clone(), vec![s("draft")], vec![s("published")]);

    let err = machine
        .run(
            &publish,
            Draft {
                body: "   ".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, RunError::Transition(ArticleError::EmptyBody)));

    machine.entity_mut().read_only = true;
    let err = machine.run(&publish, sample()).unwrap_err();
    assert_eq!(err.into_domain_error(), Some(ArticleError::StoreRejected));
    assert_eq!(machine.current_state(), "draft");
}

#[test]
fn declarative_rules_drive_the_machine() {
    init_tracing();
    let publish = publish();
    let archive: Step = Transition::new("archive", |_| Ok(s("archived")));
    let registry = TransitionRegistry::new()
        .with(publish.clone())
        .unwrap()
        .with(archive.clone())
        .unwrap();

    let definition: MachineDefinition<String> = MachineDefinition::from_json(
        r#"{
            "rules": [
                { "transition": "publish", "from": [{ "is": "draft" }], "to": [{ "is": "published" }] },
                { "transition": "archive", "from": ["any"], "to": [{ "is": "archived" }] }
            ]
        }"#,
    )
    .unwrap();

    let mut machine = StateMachineBuilder::new()
        .bind(Article::in_state("draft"))
        .definition(&definition, &registry)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(machine.available_transitions(), vec![publish.clone(), archive.clone()]);
    machine.run(&publish, sample()).unwrap();
    machine.run(&archive, sample()).unwrap();

    assert_eq!(machine.entity().writes, vec![s("published"), s("archived")]);
    assert_eq!(machine.definition(), definition);
    assert!(machine.terminal_states().is_empty());
}

#[tokio::test]
async fn serialized_callers_commit_exactly_once() {
    init_tracing();
    let claim: Step = Transition::new("claim", |_| Ok(s("claimed")));
    let mut machine = StateMachine::new(Article::in_state("open"));
    machine.add_transition(claim.clone(), vec![s("open")], vec![s("claimed")]);

    let shared = Arc::new(Mutex::new(machine));
    let mut handles = Vec::new();
    for _ in 0..8 {
        let shared = Arc::clone(&shared);
        let claim = claim.clone();
        handles.push(tokio::spawn(async move {
            let mut machine = shared.lock().await;
            machine.run(&claim, sample()).is_ok()
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    let machine = shared.lock().await;
    assert_eq!(machine.entity().writes, vec![s("claimed")]);
    assert!(machine.available_transitions().is_empty());
}

#[test]
fn wildcard_rules_expose_state_view() {
    init_tracing();
    let reset: Step = Transition::new("reset", |_| Ok(s("draft")));
    let machine = StateMachineBuilder::new()
        .bind(Article::in_state("review"))
        .rule(publish(), vec![s("draft"), s("review")], vec![s("published")])
        .rule(reset, StateSet::any(), vec![s("draft")])
        .build()
        .unwrap();

    assert_eq!(
        machine.all_states(),
        vec![s("draft"), s("review"), s("published")]
    );
    assert_eq!(machine.available_transitions().len(), 2);
}
