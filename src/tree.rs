//! Path-reconstructing search tree
//!
//! The tree records, for every state visited by a path-mode search, the
//! best known parent and the action leading from it. It is stored as an
//! arena of entries indexed by position plus a state-to-index map, so
//! re-parenting a state only overwrites one index.

use std::collections::HashMap;
use std::fmt;

use crate::{game_state::GameState, node::Node, Result, SearchError};

/// One recorded vertex of the search tree
struct TreeEntry<S: GameState> {
    state: S,
    parent: Option<usize>,
    action: Option<S::Action>,
}

/// Search tree with "last insert wins" parent edges
///
/// Paths are recomputed from the live edges on every query. A path obtained
/// before a later [`insert`](SearchTree::insert) re-parents one of its
/// states can disagree with the path returned afterwards.
pub struct SearchTree<S: GameState> {
    entries: Vec<TreeEntry<S>>,
    index: HashMap<S, usize>,
    root: Option<usize>,
}

impl<S: GameState> SearchTree<S> {
    /// Creates an empty tree
    pub fn new() -> Self {
        SearchTree {
            entries: Vec::new(),
            index: HashMap::new(),
            root: None,
        }
    }

    /// Records `node` as the root
    ///
    /// A state already present keeps its arena slot but loses its parent.
    pub fn insert_root(&mut self, node: &Node<S>) {
        let idx = self.slot_for(node.state());
        let entry = &mut self.entries[idx];
        entry.parent = None;
        entry.action = None;
        self.root = Some(idx);
    }

    /// Records `parent` as the parent of `child`, overwriting any earlier edge
    ///
    /// Returns [`SearchError::NodeNotInTree`] if `parent` was never inserted
    /// and [`SearchError::CyclicParent`] if `child` is an ancestor of
    /// `parent` (or the same state), which would make the path unbounded.
    pub fn insert(&mut self, parent: &Node<S>, child: &Node<S>) -> Result<()> {
        let parent_idx = *self
            .index
            .get(parent.state())
            .ok_or(SearchError::NodeNotInTree)?;

        if let Some(&child_idx) = self.index.get(child.state()) {
            if self.is_ancestor_or_self(child_idx, parent_idx) {
                return Err(SearchError::CyclicParent);
            }
        }

        let child_idx = self.slot_for(child.state());
        let entry = &mut self.entries[child_idx];
        entry.parent = Some(parent_idx);
        entry.action = child.action().cloned();
        if self.root == Some(child_idx) {
            self.root = None;
        }
        Ok(())
    }

    /// Returns true if the node's state has been recorded
    pub fn contains(&self, node: &Node<S>) -> bool {
        self.contains_state(node.state())
    }

    /// Returns true if `state` has been recorded
    pub fn contains_state(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// States from the root down to the node's state, in ascending depth
    pub fn get_path_to(&self, node: &Node<S>) -> Result<Vec<S>> {
        self.path_to_state(node.state())
    }

    /// Actions along the path from the root to the node's state
    ///
    /// Applying them in order to a copy of the root reproduces the state.
    pub fn get_path_to_as_actions(&self, node: &Node<S>) -> Result<Vec<S::Action>> {
        self.actions_to_state(node.state())
    }

    /// Like [`get_path_to`](Self::get_path_to), keyed by state
    pub fn path_to_state(&self, state: &S) -> Result<Vec<S>> {
        let mut path: Vec<S> = self
            .chain(state)?
            .into_iter()
            .map(|idx| self.entries[idx].state.clone())
            .collect();
        path.reverse();
        Ok(path)
    }

    /// Like [`get_path_to_as_actions`](Self::get_path_to_as_actions), keyed by state
    pub fn actions_to_state(&self, state: &S) -> Result<Vec<S::Action>> {
        let mut actions: Vec<S::Action> = self
            .chain(state)?
            .into_iter()
            .filter_map(|idx| self.entries[idx].action.clone())
            .collect();
        actions.reverse();
        Ok(actions)
    }

    /// Number of recorded states
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no state has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the root state, if one was inserted
    pub fn root_state(&self) -> Option<&S> {
        self.root.map(|idx| &self.entries[idx].state)
    }

    /// Arena index of `state`, allocating a parentless entry if it is new
    fn slot_for(&mut self, state: &S) -> usize {
        if let Some(&idx) = self.index.get(state) {
            return idx;
        }
        let idx = self.entries.len();
        self.entries.push(TreeEntry {
            state: state.clone(),
            parent: None,
            action: None,
        });
        self.index.insert(state.clone(), idx);
        idx
    }

    /// Arena indices from `state` up to its topmost ancestor
    fn chain(&self, state: &S) -> Result<Vec<usize>> {
        let mut idx = *self.index.get(state).ok_or(SearchError::NodeNotInTree)?;
        let mut chain = vec![idx];
        while let Some(parent) = self.entries[idx].parent {
            // insert() refuses cycles, so this walk is bounded by the arena size
            debug_assert!(chain.len() <= self.entries.len());
            chain.push(parent);
            idx = parent;
        }
        Ok(chain)
    }

    /// True if `ancestor` lies on the parent chain of `idx` (or equals it)
    fn is_ancestor_or_self(&self, ancestor: usize, mut idx: usize) -> bool {
        loop {
            if idx == ancestor {
                return true;
            }
            match self.entries[idx].parent {
                Some(parent) => idx = parent,
                None => return false,
            }
        }
    }
}

impl<S: GameState> Default for SearchTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> fmt::Debug for SearchTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchTree")
            .field("states", &self.entries.len())
            .field("root", &self.root)
            .finish()
    }
}
