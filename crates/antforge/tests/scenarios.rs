//! End-to-end runs of the reference scenarios.

use antforge::prelude::*;
use antforge::AntForgeError;
use antforge_test::brute_force::brute_force_optimum;
use antforge_test::instances::{demo_config, demo_problem, DEMO_CAPACITY, DEMO_VALUES, DEMO_WEIGHTS};
use tokio::sync::mpsc;

fn quiet(config: AcoConfig) -> AcoConfig {
    config.with_show_progress(false)
}

#[test]
fn reference_instance_finds_good_selection() {
    let config = quiet(demo_config()).with_random_seed(7);
    let result = solve(&DEMO_VALUES, &DEMO_WEIGHTS, DEMO_CAPACITY, &config).unwrap();

    let bits = result.best_bits(DEMO_VALUES.len());
    let weight: f64 = bits
        .iter()
        .zip(DEMO_WEIGHTS.iter())
        .filter(|(bit, _)| **bit == 1)
        .map(|(_, w)| *w)
        .sum();

    assert!(weight <= DEMO_CAPACITY);
    assert!(result.best_value >= 47.0);
    assert!(result.best_value <= brute_force_optimum(&demo_problem()));
    assert_eq!(result.statistics.iteration_count, 100);
    assert_eq!(result.statistics.candidates_built, 3000);
}

#[test]
fn zero_capacity_has_no_solution() {
    let config = quiet(demo_config()).with_iterations(10).with_random_seed(7);
    let result = solve(&DEMO_VALUES, &DEMO_WEIGHTS, 0.0, &config).unwrap();

    assert!(result.best_selection.is_none());
    assert_eq!(result.best_value, 0.0);
    assert_eq!(result.statistics.items_selected, 0);

    let problem = KnapsackProblem::new(DEMO_VALUES.to_vec(), DEMO_WEIGHTS.to_vec(), 0.0).unwrap();
    let report = SolutionReport::new(&problem, &result);
    assert_eq!(report.to_string(), "No valid solution found.\n");
}

#[test]
fn single_fitting_item_is_selected() {
    let config = quiet(AcoConfig::default()).with_iterations(5).with_random_seed(3);
    let result = solve(&[5.0, 9.0, 7.0], &[2.0, 10.0, 12.0], 3.0, &config).unwrap();

    assert_eq!(result.best_bits(3), vec![1, 0, 0]);
    assert_eq!(result.best_value, 5.0);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let err = solve(&[1.0, 2.0], &[1.0], 5.0, &AcoConfig::default()).unwrap_err();
    assert_eq!(err, AntForgeError::InvalidInstance { values: 2, weights: 1 });
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = |threads: ThreadCount| {
        let config = quiet(demo_config())
            .with_iterations(30)
            .with_random_seed(99)
            .with_thread_count(threads);
        let result = solve(&DEMO_VALUES, &DEMO_WEIGHTS, DEMO_CAPACITY, &config).unwrap();
        (result.best_selection, result.best_value, result.best_iteration)
    };

    let first = run(ThreadCount::Auto);
    assert_eq!(first, run(ThreadCount::Auto));
    assert_eq!(first, run(ThreadCount::None));
    assert_eq!(first, run(ThreadCount::Count(3)));
}

#[test]
fn channel_streams_every_improvement() {
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let config = quiet(demo_config()).with_iterations(20).with_random_seed(5);

    let result =
        solve_with_channel(&DEMO_VALUES, &DEMO_WEIGHTS, DEMO_CAPACITY, &config, sender).unwrap();

    let mut streamed = Vec::new();
    while let Ok((selection, value)) = receiver.try_recv() {
        assert_eq!(demo_problem().evaluate(&selection).total_value, value);
        streamed.push(value);
    }

    assert_eq!(streamed.len(), result.statistics.improvement_count());
    assert!(streamed.windows(2).all(|w| w[1] > w[0]));
    assert_eq!(streamed.last().copied(), Some(result.best_value));
}
