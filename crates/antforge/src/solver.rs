//! Solver entry points that hide the colony wiring.

use std::sync::Arc;

use antforge_config::AcoConfig;
use antforge_core::{KnapsackProblem, Result, Selection};
use antforge_solver::{AntColony, ChannelListener, ColonyResult};
use tokio::sync::mpsc;

/// Solves the knapsack instance given by `values`, `weights` and `capacity`.
///
/// # Errors
///
/// Fails before any iteration runs if `values` and `weights` differ in
/// length, or if `config` holds a NaN or infinite parameter.
pub fn solve(
    values: &[f64],
    weights: &[f64],
    capacity: f64,
    config: &AcoConfig,
) -> Result<ColonyResult> {
    let problem = KnapsackProblem::new(values.to_vec(), weights.to_vec(), capacity)?;
    solve_problem(problem, config)
}

/// Solves an already built instance.
pub fn solve_problem(problem: KnapsackProblem, config: &AcoConfig) -> Result<ColonyResult> {
    #[cfg(feature = "console")]
    antforge_console::init();

    Ok(AntColony::new(problem, config.clone())?.solve())
}

/// Like [`solve`], streaming every improvement through `sender` as it is found.
pub fn solve_with_channel(
    values: &[f64],
    weights: &[f64],
    capacity: f64,
    config: &AcoConfig,
    sender: mpsc::UnboundedSender<(Selection, f64)>,
) -> Result<ColonyResult> {
    #[cfg(feature = "console")]
    antforge_console::init();

    let problem = KnapsackProblem::new(values.to_vec(), weights.to_vec(), capacity)?;
    let colony = AntColony::new(problem, config.clone())?
        .with_listener(Arc::new(ChannelListener::new(sender)));
    Ok(colony.solve())
}
