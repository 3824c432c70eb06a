//! Candidate construction by a single agent.
//!
//! An [`Ant`] starts from an empty knapsack and repeatedly picks one of the
//! unpicked items that still fit, until none fits. Each pick scores the
//! fitting items as `tau^alpha * eta^beta` and then either exploits the
//! best score (with probability `q0`) or samples proportionally to score.

mod choice;

use antforge_config::AcoConfig;
use antforge_core::{Candidate, KnapsackProblem, Selection};

use crate::pheromone::PheromoneView;
use crate::random::RandomSource;

pub use choice::{argmax, choose, roulette};

/// Parameters an agent needs while constructing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructionParams {
    /// Pheromone exponent.
    pub alpha: f64,
    /// Heuristic exponent.
    pub beta: f64,
    /// Exploitation probability.
    pub q0: f64,
}

impl ConstructionParams {
    pub fn new(alpha: f64, beta: f64, q0: f64) -> Self {
        Self { alpha, beta, q0 }
    }

    pub fn from_config(config: &AcoConfig) -> Self {
        Self::new(config.alpha, config.beta, config.q0)
    }
}

impl Default for ConstructionParams {
    fn default() -> Self {
        Self::from_config(&AcoConfig::default())
    }
}

/// Builds one candidate from a frozen trail.
///
/// # Example
///
/// ```
/// use antforge_core::KnapsackProblem;
/// use antforge_solver::{seeded_rng, Ant, ConstructionParams, PheromoneTrail};
///
/// let problem = KnapsackProblem::new(vec![6.0, 5.0, 4.0], vec![3.0, 3.0, 3.0], 6.0).unwrap();
/// let trail = PheromoneTrail::new(problem.len());
/// let ant = Ant::new(&problem, trail.view(), ConstructionParams::default());
///
/// let (mut rng, _) = seeded_rng(Some(42));
/// let candidate = ant.construct(&mut rng);
///
/// assert!(candidate.is_valid());
/// assert_eq!(candidate.selection().count(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ant<'a> {
    problem: &'a KnapsackProblem,
    trail: PheromoneView<'a>,
    params: ConstructionParams,
}

impl<'a> Ant<'a> {
    pub fn new(
        problem: &'a KnapsackProblem,
        trail: PheromoneView<'a>,
        params: ConstructionParams,
    ) -> Self {
        debug_assert_eq!(problem.len(), trail.len(), "trail does not match problem");
        Self {
            problem,
            trail,
            params,
        }
    }

    /// Desirability of item `index`: `tau^alpha * eta^beta`, or 0 when the
    /// heuristic is not positive.
    pub fn score(&self, index: usize) -> f64 {
        let eta = self.problem.heuristic(index);
        if eta <= 0.0 {
            return 0.0;
        }
        self.trail.level(index).powf(self.params.alpha) * eta.powf(self.params.beta)
    }

    /// Constructs and evaluates one selection.
    ///
    /// Never picks an item whose weight exceeds the remaining capacity; an
    /// instance where nothing fits yields the empty selection.
    pub fn construct<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Candidate {
        let n = self.problem.len();
        let mut selection = Selection::empty(n);
        let mut remaining = self.problem.capacity();
        let mut available: Vec<usize> = (0..n).collect();

        let mut fitting = Vec::with_capacity(n);
        let mut scores = Vec::with_capacity(n);

        loop {
            fitting.clear();
            scores.clear();
            for &item in &available {
                if self.problem.weight(item) <= remaining {
                    fitting.push(item);
                    scores.push(self.score(item));
                }
            }

            if fitting.is_empty() {
                break;
            }

            let chosen = fitting[choose(&scores, self.params.q0, rng)];
            selection.select(chosen);
            remaining -= self.problem.weight(chosen);
            available.retain(|&item| item != chosen);
        }

        Candidate::evaluate(self.problem, selection)
    }
}

#[cfg(test)]
mod tests;
