//! Insertion-ordered frontiers: FIFO (breadth-first) and LIFO (depth-first)

use std::collections::VecDeque;

use super::Frontier;
use crate::{game_state::GameState, node::Node, Result, SearchError};

/// First-in first-out frontier
pub struct FifoFrontier<S: GameState> {
    queue: VecDeque<Node<S>>,
}

impl<S: GameState> FifoFrontier<S> {
    /// Creates an empty queue
    pub fn new() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl<S: GameState> Default for FifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Frontier<S> for FifoFrontier<S> {
    fn add(&mut self, node: Node<S>) {
        self.queue.push_back(node);
    }

    fn retrieve_next(&mut self) -> Result<Node<S>> {
        self.queue.pop_front().ok_or(SearchError::EmptyFrontier)
    }

    fn has_next(&mut self) -> bool {
        !self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn name(&self) -> &'static str {
        "fifo"
    }
}

/// Last-in first-out frontier
pub struct LifoFrontier<S: GameState> {
    stack: Vec<Node<S>>,
}

impl<S: GameState> LifoFrontier<S> {
    /// Creates an empty stack
    pub fn new() -> Self {
        LifoFrontier { stack: Vec::new() }
    }
}

impl<S: GameState> Default for LifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Frontier<S> for LifoFrontier<S> {
    fn add(&mut self, node: Node<S>) {
        self.stack.push(node);
    }

    fn retrieve_next(&mut self) -> Result<Node<S>> {
        self.stack.pop().ok_or(SearchError::EmptyFrontier)
    }

    fn has_next(&mut self) -> bool {
        !self.stack.is_empty()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn name(&self) -> &'static str {
        "lifo"
    }
}
