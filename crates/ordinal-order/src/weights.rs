//! Per-call weight table

use std::collections::HashMap;

/// Maps placed item names to their weight.
///
/// Weights are distinct. Inserting at weight `w` shifts every weight `>= w`
/// up by one, so the table always holds the contiguous range `0..len`.
#[derive(Debug, Default)]
pub(crate) struct WeightTable {
    weights: HashMap<String, usize>,
}

impl WeightTable {
    pub fn get(&self, name: &str) -> Option<usize> {
        self.weights.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.weights.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Record `name` at `weight`, making room by shifting later weights
    pub fn insert(&mut self, name: &str, weight: usize) {
        for w in self.weights.values_mut() {
            if *w >= weight {
                *w += 1;
            }
        }
        self.weights.insert(name.to_string(), weight);
    }

    pub fn clear(&mut self) {
        self.weights.clear();
    }
}
