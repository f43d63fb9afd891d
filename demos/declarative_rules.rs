//! Declarative Rule Tables
//!
//! This example loads a rule table from JSON, resolves it against named
//! transitions, and prints the machine description.
//!
//! Key concepts:
//! - Rules as data, transitions as code
//! - Every unknown transition name is reported in one pass
//! - `describe()` output can be stored as documentation
//!
//! Run with: cargo run --example declarative_rules

use stateful::builder::{fixed_transition, StateMachineBuilder};
use stateful::definition::{MachineDefinition, TransitionRegistry};
use stateful::{state_enum, Stateful};

state_enum! {
    enum Order {
        Placed,
        Paid,
        Shipped,
        Cancelled,
    }
}

#[derive(Debug, thiserror::Error)]
#[error("order store unavailable")]
struct StoreError;

struct OrderRecord(Order);

impl Stateful for OrderRecord {
    type State = Order;
    type Error = StoreError;

    fn state(&self) -> Order {
        self.0
    }

    fn set_state(&mut self, state: Order) -> Result<(), StoreError> {
        self.0 = state;
        Ok(())
    }
}

const RULES: &str = r#"{
    "rules": [
        { "transition": "pay",    "from": [{ "is": "Placed" }], "to": [{ "is": "Paid" }] },
        { "transition": "ship",   "from": [{ "is": "Paid" }],   "to": [{ "is": "Shipped" }] },
        { "transition": "cancel", "from": [{ "is": "Placed" }, { "is": "Paid" }], "to": [{ "is": "Cancelled" }] }
    ]
}"#;

const BROKEN_RULES: &str = r#"{
    "rules": [
        { "transition": "refund", "from": ["any"], "to": [{ "is": "Cancelled" }] },
        { "transition": "pay",    "from": [{ "is": "Placed" }], "to": [{ "is": "Paid" }] },
        { "transition": "return", "from": [{ "is": "Shipped" }], "to": [{ "is": "Placed" }] }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("stateful=debug")
        .init();

    println!("=== Declarative Rule Tables ===\n");

    let pay = fixed_transition::<_, (), StoreError>("pay", Order::Paid);
    let ship = fixed_transition("ship", Order::Shipped);
    let cancel = fixed_transition("cancel", Order::Cancelled);

    let registry = TransitionRegistry::new()
        .with(pay.clone())?
        .with(ship.clone())?
        .with(cancel)?;

    let broken: MachineDefinition<Order> = MachineDefinition::from_json(BROKEN_RULES)?;
    if let Err(err) = broken.resolve(&registry) {
        println!("Broken definition rejected: {err}\n");
    }

    let definition: MachineDefinition<Order> = MachineDefinition::from_json(RULES)?;
    let mut machine = StateMachineBuilder::new()
        .bind(OrderRecord(Order::Placed))
        .definition(&definition, &registry)?
        .build()?;

    machine.run(&pay, ())?;
    machine.run(&ship, ())?;
    println!("Order is {}\n", machine.current_state());

    println!("{}", machine.describe().to_json_pretty()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
