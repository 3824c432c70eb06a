//! Reference knapsack instances.

use antforge_config::AcoConfig;
use antforge_core::KnapsackProblem;

/// Values of the 10-item reference instance.
pub const DEMO_VALUES: [f64; 10] = [10.0, 5.0, 15.0, 7.0, 6.0, 18.0, 3.0, 12.0, 8.0, 14.0];

/// Weights of the 10-item reference instance.
pub const DEMO_WEIGHTS: [f64; 10] = [2.0, 3.0, 5.0, 7.0, 1.0, 4.0, 1.0, 6.0, 3.0, 8.0];

pub const DEMO_CAPACITY: f64 = 20.0;

/// The 10-item reference instance. Its optimum is 65.
pub fn demo_problem() -> KnapsackProblem {
    problem(DEMO_VALUES.to_vec(), DEMO_WEIGHTS.to_vec(), DEMO_CAPACITY)
}

/// The reference colony settings used with [`demo_problem`].
pub fn demo_config() -> AcoConfig {
    AcoConfig::default()
        .with_ants_per_iteration(30)
        .with_iterations(100)
        .with_exponents(1.0, 2.0)
        .with_rho(0.1)
        .with_q(100.0)
        .with_q0(0.05)
        .with_bounds(0.01, 20.0)
}

/// The reference instance with no capacity. Nothing fits.
pub fn zero_capacity_problem() -> KnapsackProblem {
    problem(DEMO_VALUES.to_vec(), DEMO_WEIGHTS.to_vec(), 0.0)
}

/// Only item 0 fits; every other item exceeds the capacity on its own.
pub fn single_fit_problem() -> KnapsackProblem {
    problem(vec![5.0, 9.0, 7.0, 20.0], vec![2.0, 10.0, 12.0, 4.0], 3.0)
}

fn problem(values: Vec<f64>, weights: Vec<f64>, capacity: f64) -> KnapsackProblem {
    match KnapsackProblem::new(values, weights, capacity) {
        Ok(problem) => problem,
        Err(e) => panic!("fixture instance is malformed: {}", e),
    }
}
