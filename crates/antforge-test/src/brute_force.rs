//! Exhaustive search over all subsets.
//!
//! Only meant for instances of a few dozen items at most.

use antforge_core::{KnapsackProblem, Selection};

/// Best valid selection of `problem`, found by enumerating every subset.
///
/// Ties keep the subset enumerated first. Returns the empty selection when
/// no item fits.
pub fn brute_force_selection(problem: &KnapsackProblem) -> Selection {
    let n = problem.len();
    assert!(n < 32, "brute force limited to fewer than 32 items, got {}", n);

    let mut best = Selection::empty(n);
    let mut best_value = 0.0;

    for mask in 0u32..(1 << n) {
        let mut selection = Selection::empty(n);
        for i in (0..n).filter(|i| mask & (1 << i) != 0) {
            selection.select(i);
        }
        let eval = problem.evaluate(&selection);
        if eval.is_valid && eval.total_value > best_value {
            best_value = eval.total_value;
            best = selection;
        }
    }

    best
}

/// Value of [`brute_force_selection`].
pub fn brute_force_optimum(problem: &KnapsackProblem) -> f64 {
    problem.evaluate(&brute_force_selection(problem)).total_value
}
