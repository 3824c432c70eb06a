//! Evaluated agent output.

use crate::problem::{Evaluation, KnapsackProblem};
use crate::selection::Selection;

/// One agent's finished selection together with its evaluation.
///
/// Candidates are created once per agent per iteration and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    selection: Selection,
    evaluation: Evaluation,
}

impl Candidate {
    /// Evaluates `selection` against `problem` and wraps the result.
    pub fn evaluate(problem: &KnapsackProblem, selection: Selection) -> Self {
        let evaluation = problem.evaluate(&selection);
        Self {
            selection,
            evaluation,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    pub fn value(&self) -> f64 {
        self.evaluation.total_value
    }

    pub fn weight(&self) -> f64 {
        self.evaluation.total_weight
    }

    pub fn is_valid(&self) -> bool {
        self.evaluation.is_valid
    }

    pub fn into_selection(self) -> Selection {
        self.selection
    }
}
