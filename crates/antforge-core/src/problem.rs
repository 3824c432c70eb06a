//! The knapsack instance.

use crate::error::{AntForgeError, Result};
use crate::selection::Selection;

/// Summary of a selection against an instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Sum of the values of the selected items.
    pub total_value: f64,
    /// Sum of the weights of the selected items.
    pub total_weight: f64,
    /// True when `total_weight <= capacity`.
    pub is_valid: bool,
}

/// An immutable 0/1 knapsack instance.
///
/// The per-item heuristic `value / weight` is computed once here; items
/// with a non-positive weight get a heuristic of 0.
///
/// # Example
///
/// ```
/// use antforge_core::{KnapsackProblem, Selection};
///
/// let problem = KnapsackProblem::new(vec![10.0, 6.0], vec![2.0, 3.0], 4.0).unwrap();
/// assert_eq!(problem.heuristic(0), 5.0);
///
/// let eval = problem.evaluate(&Selection::from_bits(&[1, 1]));
/// assert_eq!(eval.total_value, 16.0);
/// assert_eq!(eval.total_weight, 5.0);
/// assert!(!eval.is_valid);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KnapsackProblem {
    values: Vec<f64>,
    weights: Vec<f64>,
    capacity: f64,
    heuristic: Vec<f64>,
}

impl KnapsackProblem {
    /// Creates an instance.
    ///
    /// # Errors
    ///
    /// Returns [`AntForgeError::InvalidInstance`] if `values` and `weights`
    /// have different lengths.
    pub fn new(values: Vec<f64>, weights: Vec<f64>, capacity: f64) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(AntForgeError::InvalidInstance {
                values: values.len(),
                weights: weights.len(),
            });
        }

        let heuristic = values
            .iter()
            .zip(&weights)
            .map(|(&v, &w)| if w > 0.0 { v / w } else { 0.0 })
            .collect();

        Ok(Self {
            values,
            weights,
            capacity,
            heuristic,
        })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn weight(&self, index: usize) -> f64 {
        self.weights[index]
    }

    /// Static desirability of item `index`.
    pub fn heuristic(&self, index: usize) -> f64 {
        self.heuristic[index]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Sum of all item values.
    pub fn total_value(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Denominator used to normalize pheromone deposits.
    ///
    /// Equals [`total_value`](Self::total_value), or 1.0 when that sum is zero.
    pub fn deposit_denominator(&self) -> f64 {
        let total = self.total_value();
        if total != 0.0 {
            total
        } else {
            1.0
        }
    }

    /// Evaluates a selection against this instance.
    ///
    /// The selection is expected to range over exactly `len()` items.
    pub fn evaluate(&self, selection: &Selection) -> Evaluation {
        debug_assert_eq!(selection.len(), self.len(), "selection length mismatch");

        let (total_value, total_weight) = selection
            .selected_indices()
            .filter(|&i| i < self.len())
            .fold((0.0, 0.0), |(v, w), i| (v + self.values[i], w + self.weights[i]));

        Evaluation {
            total_value,
            total_weight,
            is_valid: total_weight <= self.capacity,
        }
    }
}
