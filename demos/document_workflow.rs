//! Document Approval Workflow
//!
//! This example drives a document through review with a rule table.
//!
//! Key concepts:
//! - The document owns its state; the machine only validates and commits
//! - Transition logic decides the next state from its arguments
//! - A wildcard-sourced rule (withdraw) is legal from every state
//! - Rejected runs leave the document untouched
//!
//! Run with: cargo run --example document_workflow

use stateful::builder::StateMachineBuilder;
use stateful::{state_enum, StateSet, Stateful, Transition};

state_enum! {
    enum DocState {
        Draft,
        Review,
        Approved,
        Rejected,
        Published,
        Withdrawn,
    }
}

#[derive(Debug, thiserror::Error)]
enum DocError {
    #[error("document needs at least {0} words")]
    TooShort(usize),
}

struct Document {
    id: u64,
    state: DocState,
}

impl Stateful for Document {
    type State = DocState;
    type Error = DocError;

    fn state(&self) -> DocState {
        self.state
    }

    fn set_state(&mut self, state: DocState) -> Result<(), DocError> {
        println!("  [Audit] Document {} is now {}", self.id, state);
        self.state = state;
        Ok(())
    }
}

/// What a reviewer or author hands to a transition.
#[derive(Clone, Copy)]
struct Review {
    word_count: usize,
    approve: bool,
}

type Step = Transition<DocState, Review, DocError>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("stateful=info")
        .init();

    println!("=== Document Approval Workflow ===\n");

    let submit: Step = Transition::new("submit", |review: Review| {
        if review.word_count < 100 {
            Err(DocError::TooShort(100))
        } else {
            Ok(DocState::Review)
        }
    });
    let decide: Step = Transition::new("decide", |review: Review| {
        Ok(if review.approve {
            DocState::Approved
        } else {
            DocState::Rejected
        })
    });
    let publish: Step = Transition::new("publish", |_| Ok(DocState::Published));
    let withdraw: Step = Transition::new("withdraw", |_| Ok(DocState::Withdrawn));

    let mut document = Document {
        id: 123,
        state: DocState::Draft,
    };

    let mut machine = match StateMachineBuilder::new()
        .bind(&mut document)
        .rule(submit.clone(), vec![DocState::Draft, DocState::Rejected], vec![DocState::Review])
        .rule(
            decide.clone(),
            vec![DocState::Review],
            vec![DocState::Approved, DocState::Rejected],
        )
        .rule(publish.clone(), vec![DocState::Approved], vec![DocState::Published])
        .rule(withdraw.clone(), StateSet::any(), vec![DocState::Withdrawn])
        .build()
    {
        Ok(machine) => machine,
        Err(err) => {
            eprintln!("failed to build machine: {err}");
            return;
        }
    };

    let short = Review {
        word_count: 40,
        approve: false,
    };
    let full = Review {
        word_count: 250,
        approve: true,
    };

    let steps = [
        ("Submit a 40-word draft", &submit, short),
        ("Submit a 250-word draft", &submit, full),
        ("Publish before approval", &publish, full),
        ("Reviewer approves", &decide, full),
        ("Publish", &publish, full),
        ("Submit again", &submit, full),
    ];

    for (label, transition, args) in steps {
        println!("{label}:");
        match machine.run(transition, args) {
            Ok(()) => println!("  ✓ {}\n", machine.current_state()),
            Err(err) => println!("  ✗ {err}\n"),
        }
    }

    let names: Vec<String> = machine
        .available_transitions()
        .iter()
        .map(|t| t.name().to_string())
        .collect();
    println!("Available from {}: {}", machine.current_state(), names.join(", "));

    let terminal: Vec<String> = machine
        .terminal_states()
        .iter()
        .map(|state| state.to_string())
        .collect();
    println!("Terminal states: [{}]", terminal.join(", "));

    println!("\n=== Example Complete ===");
}
