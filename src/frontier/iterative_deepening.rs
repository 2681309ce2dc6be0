//! Depth-bounded, restarting LIFO for iterative deepening
//!
//! The frontier behaves as a plain stack for nodes within the current depth
//! bound. Deeper nodes are deferred: they are not stacked, but their
//! existence is remembered so that once the stack runs dry the bound is
//! raised and the pass restarts from the root, regenerating them.

use super::Frontier;
use crate::{game_state::GameState, node::Node, Result, SearchError};

/// Iterative-deepening frontier
pub struct IterativeDeepeningFrontier<S: GameState> {
    stack: Vec<Node<S>>,
    root: Option<Node<S>>,
    bound: u32,
    candidates_pending: bool,
}

impl<S: GameState> IterativeDeepeningFrontier<S> {
    /// Creates a frontier whose first pass explores down to depth 1
    pub fn new() -> Self {
        Self::with_initial_bound(1)
    }

    /// Creates a frontier whose first pass explores down to `bound`
    pub fn with_initial_bound(bound: u32) -> Self {
        IterativeDeepeningFrontier {
            stack: Vec::new(),
            root: None,
            bound,
            candidates_pending: false,
        }
    }

    /// The depth bound of the current pass
    pub fn bound(&self) -> u32 {
        self.bound
    }

    /// True if some node was deferred during the current pass
    pub fn candidates_pending(&self) -> bool {
        self.candidates_pending
    }
}

impl<S: GameState> Default for IterativeDeepeningFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Frontier<S> for IterativeDeepeningFrontier<S> {
    fn add(&mut self, node: Node<S>) {
        if self.root.is_none() && node.depth() == 0 {
            self.root = Some(node.clone());
        }
        if node.depth() > self.bound {
            self.candidates_pending = true;
            return;
        }
        self.stack.push(node);
    }

    fn retrieve_next(&mut self) -> Result<Node<S>> {
        self.stack.pop().ok_or(SearchError::EmptyFrontier)
    }

    fn has_next(&mut self) -> bool {
        if !self.stack.is_empty() {
            return true;
        }
        if !self.candidates_pending {
            return false;
        }
        let Some(root) = self.root.clone() else {
            return false;
        };
        self.bound += 1;
        self.candidates_pending = false;
        log::debug!("iterative deepening: restarting with depth bound {}", self.bound);
        self.stack.push(root);
        true
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn name(&self) -> &'static str {
        "iterative-deepening"
    }
}
