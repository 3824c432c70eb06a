//! Test utilities for solver tests.

use std::collections::VecDeque;

use crate::random::RandomSource;

/// Replays a fixed script of draws and panics when it runs dry.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    floats: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(floats: &[f64], indices: &[usize]) -> Self {
        Self {
            floats: floats.iter().copied().collect(),
            indices: indices.iter().copied().collect(),
        }
    }

    pub fn floats(floats: &[f64]) -> Self {
        Self::new(floats, &[])
    }

    /// Returns true once every scripted draw has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.floats.is_empty() && self.indices.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.floats.pop_front().expect("scripted floats exhausted")
    }

    fn next_index(&mut self, len: usize) -> usize {
        let index = self.indices.pop_front().expect("scripted indices exhausted");
        assert!(index < len, "scripted index {} out of range {}", index, len);
        index
    }
}
