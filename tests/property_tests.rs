//! Property-based tests for the step engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated records and handler tables.

use futures::executor::block_on;
use proptest::prelude::*;
use stepwise::{
    make_state, CatchHandler, Handler, History, HistoryEntry, StatefulRecord, StepError,
    StepResult, Stepper, Transition,
};

const NAMES: [&str; 4] = ["Start", "Fetch", "Parse", "Store"];

prop_compose! {
    fn arbitrary_state()(index in 0..NAMES.len()) -> String {
        NAMES[index].to_string()
    }
}

prop_compose! {
    fn arbitrary_history()(
        entries in prop::collection::vec((arbitrary_state(), 0i64..1_000_000), 0..6)
    ) -> History<String> {
        let mut history = History::new();
        for (state, updated) in entries {
            history.archive(HistoryEntry { state, updated });
        }
        history
    }
}

prop_compose! {
    fn arbitrary_record()(
        state in arbitrary_state(),
        history in arbitrary_history(),
        updated in 0i64..1_000_000,
    ) -> StatefulRecord<String> {
        make_state::<String, ()>()
            .with_state(state)
            .with_history(history)
            .with_updated(updated)
    }
}

/// Stepper where each name moves to `targets[i]`.
fn table(targets: &[String]) -> Stepper<String> {
    let handlers = NAMES
        .iter()
        .zip(targets)
        .map(|(name, target)| (name.to_string(), Handler::goto(target.clone())));
    Stepper::builder().handlers(handlers).build().unwrap()
}

proptest! {
    #[test]
    fn done_records_are_untouched(record in arbitrary_record()) {
        let stepper = table(&NAMES.map(String::from));
        let mut record = record.with_done(true);
        let before = record.clone();

        let result = block_on(stepper.step(&mut record, &())).unwrap();

        prop_assert_eq!(result, StepResult::Finished);
        prop_assert_eq!(record, before);
    }

    #[test]
    fn unregistered_state_leaves_record_unchanged(
        record in arbitrary_record(),
        missing in "[a-z]{1,8}",
    ) {
        let stepper = table(&NAMES.map(String::from));
        let mut record = record.with_state(missing.clone());
        let before = record.clone();

        let error = block_on(stepper.step(&mut record, &())).unwrap_err();

        let rejected = matches!(error, StepError::InvalidState { ref state } if *state == missing);
        prop_assert!(rejected);
        prop_assert_eq!(record, before);
    }

    #[test]
    fn step_archives_previous_snapshot(
        record in arbitrary_record(),
        targets in prop::collection::vec(arbitrary_state(), NAMES.len()),
    ) {
        let stepper = table(&targets);
        let mut record = record;
        let (state, updated) = (record.state.clone(), record.updated);
        let length = record.history.len();

        block_on(stepper.step(&mut record, &())).unwrap();

        prop_assert_eq!(record.history.len(), length + 1);
        let expected = HistoryEntry { state, updated };
        prop_assert_eq!(record.history.latest(), Some(&expected));
    }

    #[test]
    fn goto_assigns_target(
        record in arbitrary_record(),
        targets in prop::collection::vec(arbitrary_state(), NAMES.len()),
    ) {
        let stepper = table(&targets);
        let mut record = record;
        let index = NAMES.iter().position(|name| *name == record.state).unwrap();

        block_on(stepper.step(&mut record, &())).unwrap();

        prop_assert_eq!(&record.state, &targets[index]);
    }

    #[test]
    fn catch_result_replaces_failed_transition(
        record in arbitrary_record(),
        recovery in arbitrary_state(),
    ) {
        let handlers = NAMES.iter().map(|name| {
            (
                name.to_string(),
                Handler::sync(|_, _| Err(anyhow::anyhow!("handler failed"))),
            )
        });
        let target = recovery.clone();
        let stepper: Stepper<String> = Stepper::builder()
            .handlers(handlers)
            .catch(CatchHandler::sync(move |_, _, _| Ok(Transition::To(target.clone()))))
            .build()
            .unwrap();
        let mut record = record;

        block_on(stepper.step(&mut record, &())).unwrap();

        prop_assert_eq!(record.state, recovery);
    }

    #[test]
    fn history_path_follows_visited_states(
        targets in prop::collection::vec(arbitrary_state(), NAMES.len()),
        steps in 1usize..12,
    ) {
        let stepper = table(&targets);
        let mut record: StatefulRecord<String> = make_state();
        let mut visited = Vec::new();

        for _ in 0..steps {
            visited.push(record.state.clone());
            block_on(stepper.step(&mut record, &())).unwrap();
        }

        let path: Vec<String> = record.history.path().into_iter().cloned().collect();
        prop_assert_eq!(path, visited);
    }
}
