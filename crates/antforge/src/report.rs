//! Plain-text report of a solve result.

use std::fmt;

use antforge_core::KnapsackProblem;
use antforge_solver::ColonyResult;

const RULE: &str = "============================================================";
const THIN_RULE: &str = "------------------------------------------------------------";

/// One selected item, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportItem {
    pub id: usize,
    pub value: f64,
    pub weight: f64,
}

/// Final answer of a run, ready for display.
///
/// # Example
///
/// ```
/// use antforge::prelude::*;
///
/// let problem = KnapsackProblem::new(vec![4.0, 3.0], vec![2.0, 2.0], 2.0).unwrap();
/// let config = AcoConfig::default().with_random_seed(1).with_show_progress(false);
/// let result = solve_problem(problem.clone(), &config).unwrap();
///
/// let report = SolutionReport::new(&problem, &result);
/// assert_eq!(report.items().len(), 1);
/// assert!(report.to_string().contains("Total weight: 2.0 / 2"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionReport {
    items: Option<Vec<ReportItem>>,
    total_value: f64,
    total_weight: f64,
    capacity: f64,
}

impl SolutionReport {
    pub fn new(problem: &KnapsackProblem, result: &ColonyResult) -> Self {
        let items = result.best_selection.as_ref().map(|selection| {
            selection
                .selected_indices()
                .map(|i| ReportItem {
                    id: i + 1,
                    value: problem.value(i),
                    weight: problem.weight(i),
                })
                .collect::<Vec<_>>()
        });

        let (total_value, total_weight) = match &result.best_selection {
            Some(selection) => {
                let eval = problem.evaluate(selection);
                (eval.total_value, eval.total_weight)
            }
            None => (0.0, 0.0),
        };

        Self {
            items,
            total_value,
            total_weight,
            capacity: problem.capacity(),
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.items.is_some()
    }

    /// Selected items, empty when no valid selection was found.
    pub fn items(&self) -> &[ReportItem] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Share of the capacity used, in percent. 0 when capacity is not positive.
    pub fn utilization(&self) -> f64 {
        if self.capacity > 0.0 {
            self.total_weight / self.capacity * 100.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(items) = &self.items else {
            return writeln!(f, "No valid solution found.");
        };

        writeln!(f, "{}", RULE)?;
        writeln!(f, "Best solution found")?;
        writeln!(f, "{}", RULE)?;
        if items.is_empty() {
            writeln!(f, "No items selected.")?;
        } else {
            writeln!(f, "Selected items (ID, value, weight):")?;
            for item in items {
                writeln!(
                    f,
                    "  - {:2} : value={:.1}, weight={:.1}",
                    item.id, item.value, item.weight
                )?;
            }
        }
        writeln!(f, "{}", THIN_RULE)?;
        writeln!(f, "Items selected: {}", items.len())?;
        writeln!(f, "Total value: {:.1}", self.total_value)?;
        writeln!(f, "Total weight: {:.1} / {}", self.total_weight, self.capacity)?;
        writeln!(f, "Capacity utilization: {:.1}%", self.utilization())?;
        writeln!(f, "{}", RULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use antforge_core::Selection;
    use antforge_solver::ColonyStatistics;
    use antforge_test::instances::demo_problem;

    fn result(selection: Option<Selection>, value: f64) -> ColonyResult {
        ColonyResult {
            best_selection: selection,
            best_value: value,
            best_iteration: None,
            seed: 0,
            statistics: ColonyStatistics::default(),
        }
    }

    #[test]
    fn test_report_numbers_items_from_one() {
        let problem = demo_problem();
        let selection = Selection::from_bits(&[1, 0, 1, 0, 0, 0, 0, 0, 0, 0]);
        let report = SolutionReport::new(&problem, &result(Some(selection), 25.0));

        let ids: Vec<usize> = report.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(report.total_value(), 25.0);
        assert_eq!(report.total_weight(), 7.0);
        assert!((report.utilization() - 35.0).abs() < 1e-9);

        let text = report.to_string();
        assert!(text.contains("  -  1 : value=10.0, weight=2.0"));
        assert!(text.contains("  -  3 : value=15.0, weight=5.0"));
        assert!(text.contains("Items selected: 2"));
        assert!(text.contains("Total value: 25.0"));
        assert!(text.contains("Total weight: 7.0 / 20"));
        assert!(text.contains("Capacity utilization: 35.0%"));
    }

    #[test]
    fn test_report_without_solution() {
        let report = SolutionReport::new(&demo_problem(), &result(None, 0.0));
        assert!(!report.is_feasible());
        assert!(report.items().is_empty());
        assert_eq!(report.to_string(), "No valid solution found.\n");
    }

    #[test]
    fn test_zero_capacity_utilization() {
        let problem = KnapsackProblem::new(vec![1.0], vec![0.0], 0.0).unwrap();
        let selection = Selection::from_bits(&[1]);
        let report = SolutionReport::new(&problem, &result(Some(selection), 1.0));
        assert_eq!(report.utilization(), 0.0);
        assert!(report.to_string().contains("Capacity utilization: 0.0%"));
    }
}
