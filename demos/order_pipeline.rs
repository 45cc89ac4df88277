//! Order Pipeline
//!
//! This demo steps an order record through its states one call at a time.
//!
//! Key concepts:
//! - One handler per state, returning the next state
//! - A catch handler routing payment failures to a retry state
//! - The caller owns the loop and decides when to stop
//!
//! Run with: cargo run --example order_pipeline

use stepwise::engine::{HandlerError, Stepper, Transition};
use stepwise::{state_enum, StatefulRecord};

state_enum! {
    enum OrderState {
        Start,
        Charge,
        Retry,
        Ship,
    }
    initial: Start
}

#[derive(Debug, Default)]
struct Order {
    id: u64,
    attempts: u32,
}

struct Payments {
    fail_first: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("payment for order {0} declined")]
struct Declined(u64);

#[tokio::main]
async fn main() {
    println!("=== Order Pipeline Example ===\n");

    let stepper = Stepper::<OrderState, Order, Payments>::builder()
        .goto(OrderState::Start, OrderState::Charge)
        .on_async(OrderState::Charge, |record, payments| {
            Box::pin(async move {
                record.data.attempts += 1;
                if record.data.attempts <= payments.fail_first {
                    return Err(HandlerError::new(Declined(record.data.id)));
                }
                Ok(Transition::To(OrderState::Ship))
            })
        })
        .goto(OrderState::Retry, OrderState::Charge)
        .on_sync(OrderState::Ship, |record, _| {
            println!("  Shipping order {}", record.data.id);
            record.done = true;
            Ok(Transition::NoChange)
        })
        .catch_sync(|error, _, _| {
            println!("  Caught: {}", error);
            Ok(Transition::To(OrderState::Retry))
        })
        .build()
        .unwrap();

    let payments = Payments { fail_first: 2 };
    let mut record = StatefulRecord::<OrderState, Order>::new(Order { id: 42, attempts: 0 });

    while !record.done {
        let result = stepper.step(&mut record, &payments).await.unwrap();
        println!("  {:?}", result);
    }

    println!("\nVisited: {:?}", record.history.path());
    println!("Payment attempts: {}", record.data.attempts);

    println!("\n=== Example Complete ===");
}
