//! Shared test fixtures for AntForge crates.
//!
//! - [`instances`] - reference knapsack instances and colony settings
//! - [`brute_force`] - exhaustive optimum for small instances
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! antforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use antforge_test::brute_force::brute_force_optimum;
//! use antforge_test::instances::demo_problem;
//!
//! assert_eq!(brute_force_optimum(&demo_problem()), 65.0);
//! ```

pub mod brute_force;
pub mod instances;

pub use brute_force::{brute_force_optimum, brute_force_selection};
pub use instances::{demo_config, demo_problem, single_fit_problem, zero_capacity_problem};
