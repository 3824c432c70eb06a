//! Colored rendering of the final answer.

use std::io::{self, Write};

use antforge_core::KnapsackProblem;
use antforge_solver::ColonyResult;
use owo_colors::OwoColorize;

/// Renders the best selection of `result` against `problem`.
///
/// Items are numbered from 1.
pub fn format_report(problem: &KnapsackProblem, result: &ColonyResult) -> String {
    let Some(selection) = &result.best_selection else {
        return format!("{}\n", "No valid solution found.".bright_red().bold());
    };

    let eval = problem.evaluate(selection);
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Best solution found".bright_cyan().bold()));
    for index in selection.selected_indices() {
        output.push_str(&format!(
            "  {} {:>3}  value {:>8}  weight {:>8}\n",
            "•".bright_green(),
            (index + 1).bright_white(),
            problem.value(index),
            problem.weight(index)
        ));
    }

    output.push_str(&format!(
        "{:<22}{}\n",
        "Items selected:",
        selection.count().bright_yellow()
    ));
    output.push_str(&format!(
        "{:<22}{}\n",
        "Total value:",
        eval.total_value.bright_green().bold()
    ));
    output.push_str(&format!(
        "{:<22}{} / {}\n",
        "Total weight:",
        eval.total_weight.bright_yellow(),
        problem.capacity()
    ));
    output.push_str(&format!(
        "{:<22}{}\n",
        "Capacity utilization:",
        format!("{:.1}%", utilization(eval.total_weight, problem.capacity())).bright_magenta()
    ));

    output
}

/// Prints [`format_report`] to stdout.
pub fn print_report(problem: &KnapsackProblem, result: &ColonyResult) {
    let mut stdout = io::stdout().lock();
    let _ = write!(stdout, "{}", format_report(problem, result));
    let _ = stdout.flush();
}

fn utilization(weight: f64, capacity: f64) -> f64 {
    if capacity > 0.0 {
        weight / capacity * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use antforge_config::AcoConfig;
    use antforge_solver::AntColony;
    use antforge_test::instances::{demo_problem, zero_capacity_problem};

    fn run(problem: &KnapsackProblem) -> ColonyResult {
        let config = AcoConfig::default()
            .with_iterations(10)
            .with_random_seed(1)
            .with_show_progress(false);
        AntColony::new(problem.clone(), config).unwrap().solve()
    }

    #[test]
    fn test_report_lists_selection() {
        let problem = demo_problem();
        let result = run(&problem);
        let report = format_report(&problem, &result);

        assert!(report.contains("Best solution found"));
        assert!(report.contains("Total weight:"));
        assert!(report.contains("Capacity utilization:"));
        assert!(report.contains(" / 20"));
    }

    #[test]
    fn test_report_without_solution() {
        let problem = zero_capacity_problem();
        let result = run(&problem);
        assert!(format_report(&problem, &result).contains("No valid solution found."));
    }

    #[test]
    fn test_utilization() {
        assert_eq!(utilization(10.0, 20.0), 50.0);
        assert_eq!(utilization(0.0, 0.0), 0.0);
    }
}
