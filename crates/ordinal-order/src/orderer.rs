//! The ordering engine
//!
//! Items are processed in input order. Each placement computes an integer
//! weight and inserts it into the weight table, shifting everything at or
//! after that weight. Relative constraints whose target has not been placed
//! yet are parked in the deferred graph and placed as soon as the target is.

use crate::deferred::DeferredGraph;
use crate::item::Positioned;
use crate::weights::WeightTable;
use ordinal_core::{OrdinalError, Position, Result, Side};
use std::collections::{HashMap, HashSet, VecDeque};

/// Dependents still to be placed around a freshly placed item
struct Frame {
    target: String,
    before: VecDeque<String>,
    after: VecDeque<String>,
}

/// Resolves positional constraints into a total order.
///
/// All bookkeeping is reset at the start of every [`Orderer::order`] call, so
/// one instance can be reused and nothing leaks from one call to the next.
#[derive(Debug, Default)]
pub struct Orderer {
    weights: WeightTable,
    deferred: DeferredGraph,
    /// Last `First` item placed; the next one goes directly behind it
    first_anchor: Option<String>,
    /// Insertion point for the next unconstrained item
    current_weight: usize,
    /// target -> last item placed after it, so later after-items queue up behind
    after_anchors: HashMap<String, String>,
}

impl Orderer {
    /// Create a new orderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the order of `items`, returning their names.
    ///
    /// Fails on the first invalid constraint; no partial order is returned.
    pub fn order<T: Positioned>(&mut self, items: &[T]) -> Result<Vec<String>> {
        self.reset();
        let result = self.resolve(items);
        self.reset();
        result
    }

    /// Resolve the order of `items` and return them rearranged into it
    pub fn reorder<T: Positioned>(&mut self, items: Vec<T>) -> Result<Vec<T>> {
        let names = self.order(&items)?;
        let mut slots: HashMap<String, T> = items
            .into_iter()
            .map(|item| (item.name().to_string(), item))
            .collect();

        Ok(names
            .iter()
            .filter_map(|name| slots.remove(name))
            .collect())
    }

    fn reset(&mut self) {
        self.weights.clear();
        self.deferred.clear();
        self.first_anchor = None;
        self.current_weight = 0;
        self.after_anchors.clear();
    }

    fn resolve<T: Positioned>(&mut self, items: &[T]) -> Result<Vec<String>> {
        tracing::debug!(items = items.len(), "resolving item order");

        let mut names = HashSet::with_capacity(items.len());
        for item in items {
            if !names.insert(item.name()) {
                return Err(OrdinalError::DuplicateName(item.name().to_string()));
            }
        }

        for item in items {
            let name = item.name();
            match item.position() {
                Position::None => self.place(name, self.current_weight),
                Position::First => {
                    let weight = self.first_weight();
                    self.first_anchor = Some(name.to_string());
                    self.place(name, weight);
                }
                Position::Last => self.place(name, self.weights.len()),
                Position::Before(target) => {
                    self.place_relative(name, Side::Before, target, &names)?
                }
                Position::After(target) => {
                    self.place_relative(name, Side::After, target, &names)?
                }
            }
        }

        debug_assert!(self.deferred.is_empty());

        let mut ranked: Vec<(usize, &str)> = items
            .iter()
            .filter_map(|item| self.weights.get(item.name()).map(|w| (w, item.name())))
            .collect();
        debug_assert_eq!(ranked.len(), items.len());
        ranked.sort_by_key(|(weight, _)| *weight);

        Ok(ranked.into_iter().map(|(_, name)| name.to_string()).collect())
    }

    fn place_relative(
        &mut self,
        name: &str,
        side: Side,
        target: &str,
        names: &HashSet<&str>,
    ) -> Result<()> {
        match (self.weights.get(target), side) {
            (Some(weight), Side::Before) => self.place(name, weight),
            (Some(_), Side::After) => {
                let weight = self.after_weight(name, target);
                self.place(name, weight);
            }
            (None, _) => self.defer(name, side, target, names)?,
        }
        Ok(())
    }

    /// Park `name` until `target` is placed, rejecting constraints that can
    /// never resolve
    fn defer(
        &mut self,
        name: &str,
        side: Side,
        target: &str,
        names: &HashSet<&str>,
    ) -> Result<()> {
        if !names.contains(target) {
            return Err(OrdinalError::InvalidDifferedTarget {
                item: name.to_string(),
                side,
                target: target.to_string(),
            });
        }

        if let Some(chain) = self.deferred.same_side_cycle(name, side, target) {
            return Err(OrdinalError::CircularChain { chain, side });
        }

        if self.deferred.target_of(side.opposite(), target) == Some(name) {
            return Err(OrdinalError::SymmetricConflict {
                item: name.to_string(),
                target: target.to_string(),
            });
        }

        // A loop alternating sides can't resolve either
        if let Some(chain) = self.deferred.mixed_cycle(name, target) {
            return Err(OrdinalError::CircularChain { chain, side });
        }

        tracing::debug!(
            item = name,
            %side,
            waits_on = target,
            "deferring until target is placed"
        );
        self.deferred.register(name, side, target);
        Ok(())
    }

    /// Place `name` at `weight`, then place everything waiting on it.
    ///
    /// Dependents are resolved depth-first through an explicit stack: each
    /// newly placed dependent has its own waiting items placed before the
    /// next sibling dependent is considered.
    fn place(&mut self, name: &str, weight: usize) {
        self.assign(name, weight);

        let mut stack = vec![self.frame(name)];
        while let Some(frame) = stack.last_mut() {
            let (dependent, weight) = if let Some(dependent) = frame.before.pop_front() {
                // Directly in front of the target, behind earlier before-dependents
                let weight = self.weights.get(&frame.target).unwrap_or_default();
                (dependent, weight)
            } else if let Some(dependent) = frame.after.pop_front() {
                let weight = self.after_weight(&dependent, &frame.target);
                (dependent, weight)
            } else {
                stack.pop();
                continue;
            };

            tracing::trace!(item = %dependent, weight, "resolving deferred item");
            self.assign(&dependent, weight);
            let next = self.frame(&dependent);
            stack.push(next);
        }
    }

    fn frame(&mut self, name: &str) -> Frame {
        Frame {
            target: name.to_string(),
            before: self.deferred.take(Side::Before, name),
            after: self.deferred.take(Side::After, name),
        }
    }

    /// Weight directly behind the last `First` item, wherever insertions in
    /// front of it have moved it
    fn first_weight(&self) -> usize {
        self.first_anchor
            .as_deref()
            .and_then(|anchor| self.weights.get(anchor))
            .map_or(0, |w| w + 1)
    }

    /// Weight directly behind `target` and whatever was already placed after it
    fn after_weight(&mut self, name: &str, target: &str) -> usize {
        let anchor = self
            .after_anchors
            .insert(target.to_string(), name.to_string())
            .unwrap_or_else(|| target.to_string());
        self.weights.get(&anchor).map_or(self.weights.len(), |w| w + 1)
    }

    fn assign(&mut self, name: &str, weight: usize) {
        debug_assert!(!self.weights.contains(name));
        self.weights.insert(name, weight);
        if self.current_weight >= weight {
            self.current_weight += 1;
        }
        tracing::trace!(item = name, weight, "placed item");
    }
}

/// Resolve the order of `items` with a fresh [`Orderer`]
pub fn order<T: Positioned>(items: &[T]) -> Result<Vec<String>> {
    Orderer::new().order(items)
}
