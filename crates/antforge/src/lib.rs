//! AntForge - Ant Colony Optimization for the 0/1 knapsack problem.
//!
//! One call builds the instance, runs the colony and returns the best
//! selection found.
//!
//! # Example
//!
//! ```rust
//! use antforge::prelude::*;
//!
//! let config = AcoConfig::default()
//!     .with_iterations(20)
//!     .with_random_seed(42)
//!     .with_show_progress(false);
//!
//! let result = antforge::solve(&[10.0, 5.0, 15.0], &[2.0, 3.0, 5.0], 7.0, &config).unwrap();
//! assert_eq!(result.best_value, 25.0);
//! assert_eq!(result.best_bits(3), vec![1, 0, 1]);
//! ```

// Model types
pub use antforge_core::{AntForgeError, Candidate, Evaluation, KnapsackProblem, Result, Selection};

// Configuration
pub use antforge_config::{AcoConfig, ConfigError, ThreadCount};

// Colony engine
pub use antforge_solver::{
    AntColony, BestSelection, ChannelListener, ColonyListener, ColonyStatistics, CountingListener,
};

/// Outcome of [`solve`].
pub use antforge_solver::ColonyResult as SolveResult;

mod report;
mod solver;

pub use report::{ReportItem, SolutionReport};
pub use solver::{solve, solve_problem, solve_with_channel};

#[cfg(feature = "console")]
pub use antforge_console as console;

pub mod prelude {
    pub use super::{solve, solve_problem, solve_with_channel};
    pub use super::{AcoConfig, KnapsackProblem, Selection, SolutionReport, SolveResult, ThreadCount};
}
