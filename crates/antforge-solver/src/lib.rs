//! AntForge Solver Engine
//!
//! This crate provides the ant colony implementation including:
//! - Pheromone trail storage and its read-only construction view
//! - The agent that builds one candidate selection per iteration
//! - The colony loop (construction, best tracking, trail update)
//! - Event listeners and statistics for monitoring a run
//!
//! Logging levels:
//! - **INFO**: Solve start/end, periodic progress
//! - **DEBUG**: New best selections, seed in use
//! - **TRACE**: Per-iteration summaries

pub mod ant;
pub mod colony;
pub mod event;
pub mod pheromone;
pub mod random;
pub mod statistics;

#[cfg(test)]
mod test_utils;

pub use ant::{Ant, ConstructionParams};
pub use colony::{AntColony, BestSelection, ColonyResult};
pub use event::{ChannelListener, ColonyEventSupport, ColonyListener, CountingListener};
pub use pheromone::{PheromoneTrail, PheromoneView};
pub use random::{seeded_rng, RandomSource};
pub use statistics::{ColonyStatistics, Improvement, StatisticsCollector};
