//! Colony statistics collection and reporting.
//!
//! Counters are atomic so agents running on rayon workers can record their
//! candidates without synchronizing with each other.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use antforge_core::Candidate;

/// Record of a best-value improvement.
#[derive(Debug, Clone, PartialEq)]
pub struct Improvement {
    /// Iteration (0-based) in which the improvement was found.
    pub iteration: usize,
    /// The new best value.
    pub value: f64,
    /// Time since the run started.
    pub time_offset: Duration,
}

/// Complete statistics for a colony run.
#[derive(Debug, Clone, Default)]
pub struct ColonyStatistics {
    /// Total time spent solving.
    pub total_duration: Duration,
    /// Iterations completed.
    pub iteration_count: u64,
    /// Candidates built by all agents.
    pub candidates_built: u64,
    /// Candidates whose weight fits the capacity.
    pub valid_candidates: u64,
    /// Items picked, summed over all candidates.
    pub items_selected: u64,
    /// History of best-value improvements.
    pub improvements: Vec<Improvement>,
}

impl ColonyStatistics {
    /// Returns the share of candidates that were valid.
    pub fn validity_rate(&self) -> f64 {
        if self.candidates_built == 0 {
            0.0
        } else {
            self.valid_candidates as f64 / self.candidates_built as f64
        }
    }

    /// Returns the candidates built per second.
    pub fn candidates_per_second(&self) -> u64 {
        let secs = self.total_duration.as_secs_f64();
        if secs > 0.0 {
            (self.candidates_built as f64 / secs) as u64
        } else {
            0
        }
    }

    /// Returns the best value recorded, if any.
    pub fn best_value(&self) -> Option<f64> {
        self.improvements.last().map(|i| i.value)
    }

    pub fn improvement_count(&self) -> usize {
        self.improvements.len()
    }
}

/// Thread-safe collector for colony statistics.
#[derive(Debug)]
pub struct StatisticsCollector {
    start_time: Instant,
    iterations: AtomicU64,
    candidates: AtomicU64,
    valid: AtomicU64,
    items: AtomicU64,
    improvements: Mutex<Vec<Improvement>>,
}

impl StatisticsCollector {
    /// Creates a new collector. The start time is recorded now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            iterations: AtomicU64::new(0),
            candidates: AtomicU64::new(0),
            valid: AtomicU64::new(0),
            items: AtomicU64::new(0),
            improvements: Mutex::new(Vec::new()),
        }
    }

    /// Records one finished candidate.
    pub fn record_candidate(&self, candidate: &Candidate) {
        self.candidates.fetch_add(1, Ordering::Relaxed);
        if candidate.is_valid() {
            self.valid.fetch_add(1, Ordering::Relaxed);
        }
        self.items
            .fetch_add(candidate.selection().count() as u64, Ordering::Relaxed);
    }

    /// Records a completed iteration.
    pub fn record_iteration(&self) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a new best value.
    pub fn record_improvement(&self, iteration: usize, value: f64) {
        let improvement = Improvement {
            iteration,
            value,
            time_offset: self.start_time.elapsed(),
        };

        if let Ok(mut history) = self.improvements.lock() {
            history.push(improvement);
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn current_candidates(&self) -> u64 {
        self.candidates.load(Ordering::Relaxed)
    }

    pub fn current_items_selected(&self) -> u64 {
        self.items.load(Ordering::Relaxed)
    }

    /// Takes a snapshot of current statistics without consuming the collector.
    pub fn snapshot(&self) -> ColonyStatistics {
        let improvements = match self.improvements.lock() {
            Ok(history) => history.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        ColonyStatistics {
            total_duration: self.start_time.elapsed(),
            iteration_count: self.iterations.load(Ordering::Relaxed),
            candidates_built: self.candidates.load(Ordering::Relaxed),
            valid_candidates: self.valid.load(Ordering::Relaxed),
            items_selected: self.items.load(Ordering::Relaxed),
            improvements,
        }
    }

    /// Converts this collector into final statistics.
    pub fn into_statistics(self) -> ColonyStatistics {
        let improvements = self
            .improvements
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        ColonyStatistics {
            total_duration: self.start_time.elapsed(),
            iteration_count: self.iterations.into_inner(),
            candidates_built: self.candidates.into_inner(),
            valid_candidates: self.valid.into_inner(),
            items_selected: self.items.into_inner(),
            improvements,
        }
    }
}

impl Default for StatisticsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use antforge_core::{KnapsackProblem, Selection};

    fn candidate(bits: &[u8]) -> Candidate {
        let problem = KnapsackProblem::new(vec![1.0, 2.0, 3.0], vec![1.0, 1.0, 1.0], 2.0).unwrap();
        Candidate::evaluate(&problem, Selection::from_bits(bits))
    }

    #[test]
    fn test_record_candidate() {
        let collector = StatisticsCollector::new();
        collector.record_candidate(&candidate(&[1, 1, 0]));
        collector.record_candidate(&candidate(&[1, 1, 1]));

        let stats = collector.into_statistics();
        assert_eq!(stats.candidates_built, 2);
        assert_eq!(stats.valid_candidates, 1);
        assert_eq!(stats.items_selected, 5);
        assert!((stats.validity_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_improvement() {
        let collector = StatisticsCollector::new();
        collector.record_improvement(0, 10.0);
        collector.record_improvement(3, 12.0);

        let stats = collector.into_statistics();
        assert_eq!(stats.improvement_count(), 2);
        assert_eq!(stats.best_value(), Some(12.0));
        assert_eq!(stats.improvements[1].iteration, 3);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = ColonyStatistics::default();
        assert_eq!(stats.validity_rate(), 0.0);
        assert_eq!(stats.candidates_per_second(), 0);
        assert!(stats.best_value().is_none());
    }

    #[test]
    fn test_snapshot_keeps_collector_usable() {
        let collector = StatisticsCollector::new();
        collector.record_iteration();

        let snapshot = collector.snapshot();
        assert_eq!(snapshot.iteration_count, 1);

        collector.record_iteration();
        assert_eq!(collector.into_statistics().iteration_count, 2);
    }

    #[test]
    fn test_collector_thread_safety() {
        let collector = StatisticsCollector::new();
        let valid = candidate(&[1, 0, 0]);

        rayon::scope(|s| {
            for _ in 0..4 {
                s.spawn(|_| {
                    for _ in 0..1000 {
                        collector.record_candidate(&valid);
                    }
                });
            }
        });

        assert_eq!(collector.current_candidates(), 4000);
        assert_eq!(collector.current_items_selected(), 4000);
    }
}
