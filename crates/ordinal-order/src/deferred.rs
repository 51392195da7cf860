//! Deferred before/after constraints, kept as a directed graph
//!
//! Each pending constraint is an edge `item -> target` labelled with its side.
//! An item declares a single position, so it has at most one outgoing edge
//! across both sides and every walk below follows a single path.

use ordinal_core::Side;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Default)]
struct SideRegistry {
    /// target -> items waiting on it, in registration order
    waiting: HashMap<String, VecDeque<String>>,
    /// item -> the target it waits on
    edges: HashMap<String, String>,
}

impl SideRegistry {
    fn register(&mut self, item: &str, target: &str) {
        self.waiting
            .entry(target.to_string())
            .or_default()
            .push_back(item.to_string());
        self.edges.insert(item.to_string(), target.to_string());
    }

    fn take(&mut self, target: &str) -> VecDeque<String> {
        let waiting = self.waiting.remove(target).unwrap_or_default();
        for item in &waiting {
            self.edges.remove(item);
        }
        waiting
    }
}

/// Items whose target has not been placed yet
#[derive(Debug, Default)]
pub(crate) struct DeferredGraph {
    before: SideRegistry,
    after: SideRegistry,
}

impl DeferredGraph {
    fn side(&self, side: Side) -> &SideRegistry {
        match side {
            Side::Before => &self.before,
            Side::After => &self.after,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideRegistry {
        match side {
            Side::Before => &mut self.before,
            Side::After => &mut self.after,
        }
    }

    /// The target `item` is waiting on for `side`, if any
    pub fn target_of(&self, side: Side, item: &str) -> Option<&str> {
        self.side(side).edges.get(item).map(String::as_str)
    }

    pub fn register(&mut self, item: &str, side: Side, target: &str) {
        self.side_mut(side).register(item, target);
    }

    /// Remove and return the items waiting on `target` for `side`
    pub fn take(&mut self, side: Side, target: &str) -> VecDeque<String> {
        self.side_mut(side).take(target)
    }

    pub fn is_empty(&self) -> bool {
        self.before.edges.is_empty() && self.after.edges.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Path `item -> target -> ... -> item` if adding the edge `item -> target`
    /// on `side` closes a loop made only of `side` edges
    pub fn same_side_cycle(&self, item: &str, side: Side, target: &str) -> Option<Vec<String>> {
        self.walk(item, target, |node| self.target_of(side, node))
    }

    /// Path `item -> target -> ... -> item` if adding the edge closes a loop
    /// through edges of either side
    pub fn mixed_cycle(&self, item: &str, target: &str) -> Option<Vec<String>> {
        self.walk(item, target, |node| {
            self.target_of(Side::Before, node)
                .or_else(|| self.target_of(Side::After, node))
        })
    }

    fn walk<'a>(
        &'a self,
        item: &str,
        target: &'a str,
        next: impl Fn(&str) -> Option<&'a str>,
    ) -> Option<Vec<String>> {
        let limit = self.before.edges.len() + self.after.edges.len() + 1;
        let mut chain = vec![item.to_string()];
        let mut current = target;

        loop {
            chain.push(current.to_string());
            if current == item {
                return Some(chain);
            }
            if chain.len() > limit + 1 {
                return None;
            }
            current = next(current)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_returns_registration_order() {
        let mut graph = DeferredGraph::default();
        graph.register("b", Side::Before, "a");
        graph.register("c", Side::Before, "a");
        graph.register("d", Side::After, "a");

        let before: Vec<_> = graph.take(Side::Before, "a").into_iter().collect();
        assert_eq!(before, vec!["b", "c"]);
        assert_eq!(graph.target_of(Side::Before, "b"), None);
        assert_eq!(graph.target_of(Side::After, "d"), Some("a"));

        graph.take(Side::After, "a");
        assert!(graph.is_empty());
    }

    #[test]
    fn test_same_side_cycle() {
        let mut graph = DeferredGraph::default();
        graph.register("a", Side::Before, "b");
        graph.register("b", Side::Before, "c");

        let chain = graph.same_side_cycle("c", Side::Before, "a").unwrap();
        assert_eq!(chain, vec!["c", "a", "b", "c"]);

        assert!(graph.same_side_cycle("c", Side::After, "a").is_none());
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let graph = DeferredGraph::default();
        let chain = graph.same_side_cycle("a", Side::After, "a").unwrap();
        assert_eq!(chain, vec!["a", "a"]);
    }

    #[test]
    fn test_mixed_cycle() {
        let mut graph = DeferredGraph::default();
        graph.register("a", Side::Before, "b");
        graph.register("b", Side::After, "c");

        assert!(graph.same_side_cycle("c", Side::Before, "a").is_none());
        let chain = graph.mixed_cycle("c", "a").unwrap();
        assert_eq!(chain, vec!["c", "a", "b", "c"]);
    }

    #[test]
    fn test_open_path_is_not_a_cycle() {
        let mut graph = DeferredGraph::default();
        graph.register("a", Side::Before, "b");
        assert!(graph.mixed_cycle("c", "a").is_none());
    }
}
