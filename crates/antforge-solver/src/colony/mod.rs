//! The colony loop.
//!
//! Each iteration runs a construction phase, in which every agent builds one
//! candidate from the same frozen trail, followed by an update phase that
//! evaporates, reinforces and clamps the trail.

use std::fmt;
use std::sync::Arc;

use antforge_config::{AcoConfig, ThreadCount};
use antforge_core::{AntForgeError, Candidate, KnapsackProblem, Result, Selection};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

use crate::ant::{Ant, ConstructionParams};
use crate::event::{ColonyEventSupport, ColonyListener};
use crate::pheromone::PheromoneTrail;
use crate::random::seeded_rng;
use crate::statistics::{ColonyStatistics, StatisticsCollector};

/// Best valid selection seen so far.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSelection {
    pub selection: Selection,
    pub value: f64,
    /// Iteration (0-based) in which it was found.
    pub iteration: usize,
}

/// Outcome of a colony run.
#[derive(Debug, Clone)]
pub struct ColonyResult {
    /// Best valid selection, or `None` when no candidate ever beat 0.
    pub best_selection: Option<Selection>,
    pub best_value: f64,
    pub best_iteration: Option<usize>,
    /// Seed of the master generator.
    pub seed: u64,
    pub statistics: ColonyStatistics,
}

impl ColonyResult {
    pub fn is_feasible(&self) -> bool {
        self.best_selection.is_some()
    }

    /// The best selection as a 0/1 sequence, or all zeros when there is none.
    pub fn best_bits(&self, n: usize) -> Vec<u8> {
        match &self.best_selection {
            Some(selection) => selection.to_bits(),
            None => vec![0; n],
        }
    }
}

enum Executor {
    Sequential,
    Global,
    Pool(rayon::ThreadPool),
}

impl Executor {
    fn from_thread_count(thread_count: &ThreadCount) -> Self {
        match thread_count {
            ThreadCount::Auto => Executor::Global,
            ThreadCount::None => Executor::Sequential,
            ThreadCount::Count(n) => {
                match rayon::ThreadPoolBuilder::new().num_threads(*n).build() {
                    Ok(pool) => Executor::Pool(pool),
                    Err(e) => {
                        warn!(
                            event = "thread_pool_fallback",
                            threads = *n,
                            error = %e,
                            "Could not build thread pool, constructing sequentially"
                        );
                        Executor::Sequential
                    }
                }
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            Executor::Sequential => "sequential".to_string(),
            Executor::Global => format!("global({})", rayon::current_num_threads()),
            Executor::Pool(pool) => format!("pool({})", pool.current_num_threads()),
        }
    }
}

/// Ant colony over one knapsack instance.
///
/// # Example
///
/// ```
/// use antforge_config::AcoConfig;
/// use antforge_core::KnapsackProblem;
/// use antforge_solver::AntColony;
///
/// let problem = KnapsackProblem::new(vec![6.0, 5.0, 4.0], vec![3.0, 3.0, 3.0], 6.0).unwrap();
/// let config = AcoConfig::default()
///     .with_iterations(10)
///     .with_random_seed(7)
///     .with_show_progress(false);
///
/// let result = AntColony::new(problem, config).unwrap().solve();
/// assert_eq!(result.best_value, 11.0);
/// ```
pub struct AntColony {
    problem: KnapsackProblem,
    config: AcoConfig,
    params: ConstructionParams,
    trail: PheromoneTrail,
    best: Option<BestSelection>,
    rng: ChaCha8Rng,
    seed: u64,
    iteration: usize,
    statistics: StatisticsCollector,
    events: ColonyEventSupport,
    executor: Executor,
}

impl AntColony {
    /// Creates a colony with a uniform trail and no best selection.
    ///
    /// # Errors
    ///
    /// Returns [`AntForgeError::Config`] if a numeric parameter is NaN or
    /// infinite. Finite out-of-range values are only logged as warnings.
    pub fn new(problem: KnapsackProblem, config: AcoConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| AntForgeError::Config(e.to_string()))?;

        for warning in config.check() {
            warn!(event = "config_warning", "{}", warning);
        }

        let (rng, seed) = seeded_rng(config.random_seed);
        let executor = Executor::from_thread_count(&config.thread_count);

        Ok(Self {
            trail: PheromoneTrail::new(problem.len()),
            params: ConstructionParams::from_config(&config),
            problem,
            config,
            best: None,
            rng,
            seed,
            iteration: 0,
            statistics: StatisticsCollector::new(),
            events: ColonyEventSupport::new(),
            executor,
        })
    }

    pub fn with_listener(mut self, listener: Arc<dyn ColonyListener>) -> Self {
        self.events.add_listener(listener);
        self
    }

    pub fn add_listener(&mut self, listener: Arc<dyn ColonyListener>) {
        self.events.add_listener(listener);
    }

    pub fn problem(&self) -> &KnapsackProblem {
        &self.problem
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    pub fn trail(&self) -> &PheromoneTrail {
        &self.trail
    }

    pub fn best(&self) -> Option<&BestSelection> {
        self.best.as_ref()
    }

    pub fn best_value(&self) -> f64 {
        self.best.as_ref().map_or(0.0, |b| b.value)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn statistics(&self) -> &StatisticsCollector {
        &self.statistics
    }

    /// Runs one construction phase followed by one update phase.
    ///
    /// Returns the candidates built in this iteration, in agent order.
    pub fn step(&mut self) -> Vec<Candidate> {
        let iteration = self.iteration;

        let seeds: Vec<u64> = (0..self.config.ants_per_iteration)
            .map(|_| self.rng.random())
            .collect();
        let candidates = self.construct_candidates(&seeds);

        for candidate in &candidates {
            self.statistics.record_candidate(candidate);
        }
        self.update_best(iteration, &candidates);
        self.update_trail(&candidates);

        self.statistics.record_iteration();
        self.events
            .fire_iteration_ended(iteration, self.trail.view(), &candidates);

        trace!(
            event = "iteration",
            iteration = iteration + 1,
            candidates = candidates.len(),
            valid = candidates.iter().filter(|c| c.is_valid()).count(),
            best_value = self.best_value(),
        );

        self.iteration += 1;
        candidates
    }

    /// Runs all configured iterations and returns the best selection.
    pub fn solve(mut self) -> ColonyResult {
        let iterations = self.config.iterations;

        info!(
            event = "solve_start",
            item_count = self.problem.len(),
            capacity = self.problem.capacity(),
            ants = self.config.ants_per_iteration,
            iterations = iterations,
        );
        debug!(
            event = "colony_setup",
            seed = self.seed,
            executor = %self.executor.describe(),
        );

        for it in 0..iterations {
            self.step();

            if self.config.show_progress && (it % 10 == 0 || it + 1 == iterations) {
                info!(
                    event = "progress",
                    iteration = it + 1,
                    iterations = iterations,
                    best_value = self.best_value(),
                );
            }
        }

        let statistics = self.statistics.into_statistics();
        info!(
            event = "solve_end",
            best_value = self.best.as_ref().map_or(0.0, |b| b.value),
            feasible = self.best.is_some(),
            iterations = statistics.iteration_count,
            candidates = statistics.candidates_built,
            duration_ms = statistics.total_duration.as_millis() as u64,
        );

        let (best_selection, best_value, best_iteration) = match self.best {
            Some(best) => (Some(best.selection), best.value, Some(best.iteration)),
            None => (None, 0.0, None),
        };

        ColonyResult {
            best_selection,
            best_value,
            best_iteration,
            seed: self.seed,
            statistics,
        }
    }

    fn construct_candidates(&self, seeds: &[u64]) -> Vec<Candidate> {
        let ant = Ant::new(&self.problem, self.trail.view(), self.params);
        let build = |&seed: &u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            ant.construct(&mut rng)
        };

        match &self.executor {
            Executor::Sequential => seeds.iter().map(build).collect(),
            Executor::Global => seeds.par_iter().map(build).collect(),
            Executor::Pool(pool) => pool.install(|| seeds.par_iter().map(build).collect()),
        }
    }

    fn update_best(&mut self, iteration: usize, candidates: &[Candidate]) {
        for candidate in candidates {
            if candidate.is_valid() && candidate.value() > self.best_value() {
                let best = BestSelection {
                    selection: candidate.selection().clone(),
                    value: candidate.value(),
                    iteration,
                };

                debug!(
                    event = "new_best",
                    iteration = iteration + 1,
                    best_value = best.value,
                    items = best.selection.count(),
                );
                self.statistics.record_improvement(iteration, best.value);
                self.events.fire_best_changed(iteration, &best);
                self.best = Some(best);
            }
        }
    }

    fn update_trail(&mut self, candidates: &[Candidate]) {
        let denominator = self.problem.deposit_denominator();
        let q = self.config.q;

        self.trail.evaporate(self.config.rho);

        for candidate in candidates {
            if candidate.is_valid() && candidate.value() > 0.0 {
                deposit(&mut self.trail, candidate.selection(), q * candidate.value() / denominator);
            }
        }

        if let Some(best) = &self.best {
            deposit(&mut self.trail, &best.selection, q * best.value / denominator);
        }

        self.trail.clamp(self.config.tau_min, self.config.tau_max);
    }
}

// Degenerate settings (q <= 0, negative value sums) give no reinforcement.
fn deposit(trail: &mut PheromoneTrail, selection: &Selection, amount: f64) {
    if amount > 0.0 {
        trail.deposit_on(selection, amount);
    }
}

impl fmt::Debug for AntColony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AntColony")
            .field("items", &self.problem.len())
            .field("iteration", &self.iteration)
            .field("best_value", &self.best_value())
            .field("seed", &self.seed)
            .field("executor", &self.executor.describe())
            .field("listeners", &self.events.listener_count())
            .finish()
    }
}
