// Integration tests for back/forward navigation over a run

use sortty::algorithms::{Algorithm, AlgorithmRegistry};
use sortty::errors::NavigationError;
use sortty::history::History;
use sortty::snapshot::{Element, Snapshot};

fn elements(values: &[i64]) -> Vec<Element> {
    values.iter().copied().map(Element::from_value).collect()
}

fn history(algorithm: Algorithm, values: &[i64]) -> History {
    let registry = AlgorithmRegistry::new();
    let info = registry.get(algorithm).expect("algorithm registered");
    History::new(info.engine, &elements(values))
}

/// The run as seen by stepping forward only, seed included
fn forward_only(algorithm: Algorithm, values: &[i64]) -> Vec<Snapshot> {
    let mut history = history(algorithm, values);
    let mut seen = vec![history.current().clone()];
    while let Ok(snapshot) = history.step_forward() {
        seen.push(snapshot.clone());
    }
    seen
}

const INPUT: &[i64] = &[6, 2, 9, 2, 5, 1, 7];

#[test]
fn test_round_trip_returns_to_start() {
    for algorithm in Algorithm::ALL {
        let mut history = history(algorithm, INPUT);
        let seed = history.current().clone();

        let k = history.step_forward_by(10);
        assert_eq!(k, 10);
        for _ in 0..k {
            history.step_back().expect("buffered snapshot");
        }

        assert_eq!(history.current(), &seed, "{}", algorithm);
        assert!(history.is_at_start());
    }
}

#[test]
fn test_replay_matches_uninterrupted_run() {
    for algorithm in Algorithm::ALL {
        let expected = forward_only(algorithm, INPUT);
        let mut history = history(algorithm, INPUT);
        let mut seen = vec![history.current().clone()];

        // forward 12, back 5, forward 5, then run to the end
        for _ in 0..12 {
            seen.push(history.step_forward().expect("step").clone());
        }
        for j in 1..=5 {
            let back = history.step_back().expect("back").clone();
            assert_eq!(back, expected[12 - j], "{}", algorithm);
        }
        for _ in 0..5 {
            history.step_forward().expect("replay");
        }
        assert_eq!(history.current(), &expected[12]);

        while let Ok(snapshot) = history.step_forward() {
            seen.push(snapshot.clone());
        }

        assert_eq!(seen, expected, "{}", algorithm);
    }
}

#[test]
fn test_replay_does_not_pull_the_engine() {
    let mut history = history(Algorithm::HeapSort, INPUT);

    history.step_forward_by(8);
    assert_eq!(history.engine_pulls(), 8);

    history.step_back().expect("back");
    history.step_back().expect("back");
    history.step_forward().expect("replay");
    history.step_back().expect("back");
    history.step_forward_by(2);

    assert_eq!(history.engine_pulls(), 8);
    assert_eq!(history.position(), 8);

    history.step_forward().expect("new step");
    assert_eq!(history.engine_pulls(), 9);
}

#[test]
fn test_boundaries_are_recoverable() {
    let mut history = history(Algorithm::BubbleSort, &[2, 1]);

    assert_eq!(history.step_back().err(), Some(NavigationError::AtStart));

    let steps = history.fast_forward();
    assert!(history.current().is_sorted_result());
    assert_eq!(
        history.step_forward().err(),
        Some(NavigationError::RunExhausted)
    );

    // still navigable after hitting the end
    history.step_back().expect("back from end");
    assert_eq!(history.position(), steps - 1);
    history.step_forward().expect("replay to end");
    assert!(history.is_at_end());
}

#[test]
fn test_empty_input_still_terminates() {
    let mut history = history(Algorithm::CycleSort, &[]);

    let result = history.step_forward().expect("terminal snapshot").clone();
    assert!(result.is_empty());
    assert!(result.is_sorted_result());
    assert_eq!(
        history.step_forward().err(),
        Some(NavigationError::RunExhausted)
    );
}

#[test]
fn test_rewind_then_fast_forward() {
    let mut history = history(Algorithm::SelectionSort, INPUT);
    let total = history.fast_forward();
    let end = history.current().clone();

    assert_eq!(history.rewind(), total);
    assert!(history.is_at_start());
    let pulls = history.engine_pulls();

    assert_eq!(history.fast_forward(), total);
    assert_eq!(history.current(), &end);
    assert_eq!(history.engine_pulls(), pulls);
}
