//! Frontier (open-set) policies for the single-agent search
//!
//! This module contains the containers that decide in which order nodes
//! are expanded:
//! - FIFO: breadth-first order
//! - LIFO: depth-first order
//! - Iterative deepening: a depth-bounded LIFO that restarts from the root
//! - Sorted list and balanced tree: best-first order under [`compare_nodes`]
//!
//! [`compare_nodes`]: crate::node::compare_nodes

pub mod iterative_deepening;
pub mod queue;
pub mod sorted;

pub use iterative_deepening::IterativeDeepeningFrontier;
pub use queue::{FifoFrontier, LifoFrontier};
pub use sorted::{SortedListFrontier, TreeFrontier};

use crate::{game_state::GameState, node::Node, Result};

/// Trait for the to-be-expanded container of a search
///
/// Nodes may be added in any order. Callers must check [`has_next`]
/// before calling [`retrieve_next`].
///
/// [`has_next`]: Frontier::has_next
/// [`retrieve_next`]: Frontier::retrieve_next
pub trait Frontier<S: GameState>: Send {
    /// Adds a node to the frontier
    fn add(&mut self, node: Node<S>);

    /// Removes and returns the next node to expand
    ///
    /// Returns [`crate::SearchError::EmptyFrontier`] when nothing is left.
    fn retrieve_next(&mut self) -> Result<Node<S>>;

    /// Returns true if a node is available
    ///
    /// Takes `&mut self` because some policies refill themselves here, see
    /// [`IterativeDeepeningFrontier`].
    fn has_next(&mut self) -> bool;

    /// Number of nodes currently held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

// Implement Frontier for Box<dyn Frontier>
impl<S: GameState> Frontier<S> for Box<dyn Frontier<S>> {
    fn add(&mut self, node: Node<S>) {
        (**self).add(node)
    }

    fn retrieve_next(&mut self) -> Result<Node<S>> {
        (**self).retrieve_next()
    }

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
