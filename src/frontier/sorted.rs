//! Best-first frontiers ordered by [`compare_nodes`]
//!
//! Both containers retrieve the greatest node under the comparator. The list
//! keeps a sorted `Vec` and pays a shift on insertion; the tree keeps a
//! `BTreeSet` and pays logarithmic insert and remove. Their extraction order
//! is identical.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::Frontier;
use crate::{
    config::HeuristicOrder,
    game_state::GameState,
    node::{compare_nodes, Node},
    Result, SearchError,
};

/// Sorted-list frontier
pub struct SortedListFrontier<S: GameState> {
    /// Ascending under the comparator; the next node is the last element
    nodes: Vec<Node<S>>,
    order: HeuristicOrder,
}

impl<S: GameState> SortedListFrontier<S> {
    /// Creates an empty frontier ordered under `order`
    pub fn new(order: HeuristicOrder) -> Self {
        SortedListFrontier {
            nodes: Vec::new(),
            order,
        }
    }

    /// Peeks at the node [`retrieve_next`](Frontier::retrieve_next) would return
    pub fn peek(&self) -> Option<&Node<S>> {
        self.nodes.last()
    }
}

impl<S: GameState> Frontier<S> for SortedListFrontier<S> {
    /// # Panics
    ///
    /// Panics through [`compare_nodes`] if a node with the same
    /// construction id is already present.
    fn add(&mut self, node: Node<S>) {
        let order = self.order;
        // compare_nodes never returns Equal, so the search always misses
        let index = self
            .nodes
            .binary_search_by(|other| compare_nodes(other, &node, order))
            .unwrap_or_else(|index| index);
        self.nodes.insert(index, node);
    }

    fn retrieve_next(&mut self) -> Result<Node<S>> {
        self.nodes.pop().ok_or(SearchError::EmptyFrontier)
    }

    fn has_next(&mut self) -> bool {
        !self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn name(&self) -> &'static str {
        "sorted-list"
    }
}

/// A node carrying the heuristic direction it is ordered under
struct Ranked<S: GameState> {
    node: Node<S>,
    order: HeuristicOrder,
}

impl<S: GameState> PartialEq for Ranked<S> {
    fn eq(&self, other: &Self) -> bool {
        self.node.id() == other.node.id()
    }
}

impl<S: GameState> Eq for Ranked<S> {}

impl<S: GameState> PartialOrd for Ranked<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: GameState> Ord for Ranked<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_nodes(&self.node, &other.node, self.order)
    }
}

/// Balanced-tree frontier
pub struct TreeFrontier<S: GameState> {
    nodes: BTreeSet<Ranked<S>>,
    order: HeuristicOrder,
}

impl<S: GameState> TreeFrontier<S> {
    /// Creates an empty frontier ordered under `order`
    pub fn new(order: HeuristicOrder) -> Self {
        TreeFrontier {
            nodes: BTreeSet::new(),
            order,
        }
    }

    /// Peeks at the node [`retrieve_next`](Frontier::retrieve_next) would return
    pub fn peek(&self) -> Option<&Node<S>> {
        self.nodes.last().map(|ranked| &ranked.node)
    }
}

impl<S: GameState> Frontier<S> for TreeFrontier<S> {
    /// # Panics
    ///
    /// Panics through [`compare_nodes`] if a node with the same
    /// construction id is already present.
    fn add(&mut self, node: Node<S>) {
        self.nodes.insert(Ranked {
            node,
            order: self.order,
        });
    }

    fn retrieve_next(&mut self) -> Result<Node<S>> {
        self.nodes
            .pop_last()
            .map(|ranked| ranked.node)
            .ok_or(SearchError::EmptyFrontier)
    }

    fn has_next(&mut self) -> bool {
        !self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn name(&self) -> &'static str {
        "tree"
    }
}
