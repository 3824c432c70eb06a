//! Per-item pheromone trail.
//!
//! The colony owns a [`PheromoneTrail`] and mutates it only between
//! construction phases. Agents receive a [`PheromoneView`], a shared
//! borrow of the levels, so no trail update can start while an agent
//! still reads it.

use antforge_core::Selection;

/// Mutable per-item desirability signal.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneTrail {
    levels: Vec<f64>,
}

impl PheromoneTrail {
    /// Level every item starts with.
    pub const INITIAL_LEVEL: f64 = 1.0;

    /// Creates a trail over `n` items at [`INITIAL_LEVEL`](Self::INITIAL_LEVEL).
    pub fn new(n: usize) -> Self {
        Self::uniform(n, Self::INITIAL_LEVEL)
    }

    /// Creates a trail over `n` items at `level`.
    pub fn uniform(n: usize, level: f64) -> Self {
        Self {
            levels: vec![level; n],
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, index: usize) -> f64 {
        self.levels[index]
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Returns a read-only view for agents.
    pub fn view(&self) -> PheromoneView<'_> {
        PheromoneView {
            levels: &self.levels,
        }
    }

    /// Multiplies every level by `1 - rho`.
    ///
    /// `rho` outside `(0, 1)` is applied as given.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for level in &mut self.levels {
            *level *= keep;
        }
    }

    /// Adds `amount` to the level of item `index`. `amount` must be non-negative.
    pub fn deposit(&mut self, index: usize, amount: f64) {
        debug_assert!(amount >= 0.0, "negative deposit {}", amount);
        self.levels[index] += amount;
    }

    /// Adds `amount` to every item in `selection`.
    pub fn deposit_on(&mut self, selection: &Selection, amount: f64) {
        for index in selection.selected_indices() {
            self.deposit(index, amount);
        }
    }

    /// Forces every level into `[tau_min, tau_max]`.
    ///
    /// The lower bound is checked first, so with `tau_min > tau_max` levels
    /// below `tau_min` are raised to it and everything else above `tau_max`
    /// is lowered to `tau_max`.
    pub fn clamp(&mut self, tau_min: f64, tau_max: f64) {
        for level in &mut self.levels {
            if *level < tau_min {
                *level = tau_min;
            } else if *level > tau_max {
                *level = tau_max;
            }
        }
    }

    /// Returns true if every level lies in `[tau_min, tau_max]`.
    pub fn is_within(&self, tau_min: f64, tau_max: f64) -> bool {
        self.view().is_within(tau_min, tau_max)
    }
}

/// Read-only snapshot of a trail, shared by every agent of an iteration.
#[derive(Debug, Clone, Copy)]
pub struct PheromoneView<'a> {
    levels: &'a [f64],
}

impl<'a> PheromoneView<'a> {
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, index: usize) -> f64 {
        self.levels[index]
    }

    pub fn levels(&self) -> &'a [f64] {
        self.levels
    }

    pub fn is_within(&self, tau_min: f64, tau_max: f64) -> bool {
        self.levels
            .iter()
            .all(|&level| level >= tau_min && level <= tau_max)
    }
}
