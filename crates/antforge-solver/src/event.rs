//! Event system for colony monitoring.
//!
//! Listeners registered on an [`AntColony`](crate::AntColony) are notified
//! when the best selection improves and after every trail update.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use antforge_solver::event::{ColonyEventSupport, ColonyListener};
//! use antforge_solver::BestSelection;
//!
//! #[derive(Debug)]
//! struct PrintListener;
//!
//! impl ColonyListener for PrintListener {
//!     fn on_best_changed(&self, iteration: usize, best: &BestSelection) {
//!         println!("iteration {}: {}", iteration, best.value);
//!     }
//! }
//!
//! let mut support = ColonyEventSupport::new();
//! support.add_listener(Arc::new(PrintListener));
//! assert_eq!(support.listener_count(), 1);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use antforge_core::{Candidate, Selection};
use tokio::sync::mpsc;

use crate::colony::BestSelection;
use crate::pheromone::PheromoneView;

/// Listener for colony events.
///
/// Called synchronously on the thread driving the colony, never from
/// inside a construction phase.
pub trait ColonyListener: Send + Sync + Debug {
    /// Called when a candidate strictly improves the best value.
    fn on_best_changed(&self, iteration: usize, best: &BestSelection);

    /// Called after the trail of `iteration` has been evaporated, reinforced
    /// and clamped.
    fn on_iteration_ended(
        &self,
        _iteration: usize,
        _trail: PheromoneView<'_>,
        _candidates: &[Candidate],
    ) {
    }
}

/// Central broadcaster for colony events.
///
/// Listeners are called in registration order.
#[derive(Debug, Default)]
pub struct ColonyEventSupport {
    listeners: Vec<Arc<dyn ColonyListener>>,
}

impl ColonyEventSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Arc<dyn ColonyListener>) {
        self.listeners.push(listener);
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn fire_best_changed(&self, iteration: usize, best: &BestSelection) {
        for listener in &self.listeners {
            listener.on_best_changed(iteration, best);
        }
    }

    pub fn fire_iteration_ended(
        &self,
        iteration: usize,
        trail: PheromoneView<'_>,
        candidates: &[Candidate],
    ) {
        for listener in &self.listeners {
            listener.on_iteration_ended(iteration, trail, candidates);
        }
    }
}

/// Streams every improvement through an unbounded channel.
///
/// A dropped receiver is ignored; the colony keeps running.
#[derive(Debug, Clone)]
pub struct ChannelListener {
    sender: mpsc::UnboundedSender<(Selection, f64)>,
}

impl ChannelListener {
    pub fn new(sender: mpsc::UnboundedSender<(Selection, f64)>) -> Self {
        Self { sender }
    }
}

impl ColonyListener for ChannelListener {
    fn on_best_changed(&self, _iteration: usize, best: &BestSelection) {
        let _ = self.sender.send((best.selection.clone(), best.value));
    }
}

/// Counts events. Useful for tests and quick diagnostics.
#[derive(Debug, Default)]
pub struct CountingListener {
    improvements: AtomicUsize,
    iterations: AtomicUsize,
}

impl CountingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn improvement_count(&self) -> usize {
        self.improvements.load(Ordering::SeqCst)
    }

    pub fn iteration_count(&self) -> usize {
        self.iterations.load(Ordering::SeqCst)
    }
}

impl ColonyListener for CountingListener {
    fn on_best_changed(&self, _iteration: usize, _best: &BestSelection) {
        self.improvements.fetch_add(1, Ordering::SeqCst);
    }

    fn on_iteration_ended(
        &self,
        _iteration: usize,
        _trail: PheromoneView<'_>,
        _candidates: &[Candidate],
    ) {
        self.iterations.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pheromone::PheromoneTrail;

    fn best(value: f64) -> BestSelection {
        BestSelection {
            selection: Selection::from_bits(&[1, 0]),
            value,
            iteration: 0,
        }
    }

    #[test]
    fn test_event_support_fires_all_listeners() {
        let first = Arc::new(CountingListener::new());
        let second = Arc::new(CountingListener::new());

        let mut support = ColonyEventSupport::new();
        support.add_listener(first.clone());
        support.add_listener(second.clone());

        support.fire_best_changed(0, &best(3.0));
        let trail = PheromoneTrail::new(2);
        support.fire_iteration_ended(0, trail.view(), &[]);

        assert_eq!(first.improvement_count(), 1);
        assert_eq!(second.improvement_count(), 1);
        assert_eq!(first.iteration_count(), 1);
    }

    #[test]
    fn test_clear_listeners() {
        let mut support = ColonyEventSupport::new();
        support.add_listener(Arc::new(CountingListener::new()));
        support.clear_listeners();
        assert_eq!(support.listener_count(), 0);
    }

    #[test]
    fn test_channel_listener_sends_improvements() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let listener = ChannelListener::new(sender);

        listener.on_best_changed(2, &best(7.5));

        let (selection, value) = receiver.try_recv().unwrap();
        assert_eq!(value, 7.5);
        assert_eq!(selection.to_bits(), vec![1, 0]);
    }

    #[test]
    fn test_channel_listener_ignores_dropped_receiver() {
        let (sender, receiver) = mpsc::unbounded_channel();
        drop(receiver);
        ChannelListener::new(sender).on_best_changed(0, &best(1.0));
    }
}
