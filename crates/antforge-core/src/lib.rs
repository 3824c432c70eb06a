//! AntForge Core - Knapsack model and selection types
//!
//! This crate provides the fundamental abstractions for AntForge:
//! - [`KnapsackProblem`]: the immutable instance plus its value/weight heuristic
//! - [`Selection`]: a binary item-choice vector
//! - [`Evaluation`] and [`Candidate`]: the evaluated output of one agent
//! - [`AntForgeError`]: the error type shared by all AntForge crates

pub mod candidate;
pub mod error;
pub mod problem;
pub mod selection;

pub use candidate::Candidate;
pub use error::{AntForgeError, Result};
pub use problem::{Evaluation, KnapsackProblem};
pub use selection::Selection;
