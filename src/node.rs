//! Search nodes and the ordering comparator
//!
//! A [`Node`] wraps an immutable state together with the bookkeeping the
//! frontiers need: depth, the action that produced it, its parent's id and
//! a process-wide construction id used only to break ties.

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};

use crate::config::HeuristicOrder;
use crate::game_state::GameState;
use crate::utils::compare_optional_f64;

/// Construction id of a node
///
/// Ids are handed out in strictly increasing order across the whole process.
/// [`NodeId::UNSET`] is never assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(i64);

impl NodeId {
    /// Sentinel for "no id assigned"
    pub const UNSET: NodeId = NodeId(i64::MIN);

    /// Returns the raw id
    pub fn get(self) -> i64 {
        self.0
    }

    /// True for the [`NodeId::UNSET`] sentinel
    pub fn is_unset(self) -> bool {
        self == Self::UNSET
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

static NEXT_CONSTRUCTION_ID: AtomicI64 = AtomicI64::new(i64::MIN + 1);

/// Allocates the next construction id
///
/// Panics if the id space is exhausted; wrapping around would break the
/// no-collision guarantee the comparator relies on.
fn next_construction_id() -> NodeId {
    let id = NEXT_CONSTRUCTION_ID
        .fetch_update(AtomicOrdering::Relaxed, AtomicOrdering::Relaxed, |id| {
            id.checked_add(1)
        })
        .unwrap_or_else(|_| panic!("node construction id space exhausted"));
    NodeId(id)
}

/// An immutable search node
///
/// Heuristic and utility are evaluated once at construction. The utility
/// is taken from the perspective of the player handed to the constructor,
/// normally the player to move at the search root.
pub struct Node<S: GameState> {
    state: S,
    depth: u32,
    action: Option<S::Action>,
    parent: Option<NodeId>,
    id: NodeId,
    heuristic: Option<f64>,
    utility: Option<f64>,
}

impl<S: GameState> Node<S> {
    /// Creates a root node (depth 0, no parent, no incoming action)
    pub fn root(state: S, perspective: Option<&S::Player>) -> Self {
        Self::build(state, 0, None, None, perspective)
    }

    /// Creates a child of `self` reached through `action`
    pub fn child(&self, action: S::Action, state: S, perspective: Option<&S::Player>) -> Self {
        Self::build(state, self.depth + 1, Some(action), Some(self.id), perspective)
    }

    fn build(
        state: S,
        depth: u32,
        action: Option<S::Action>,
        parent: Option<NodeId>,
        perspective: Option<&S::Player>,
    ) -> Self {
        let heuristic = state.heuristic();
        let utility = perspective.and_then(|player| state.utility(player));
        Node {
            state,
            depth,
            action,
            parent,
            id: next_construction_id(),
            heuristic,
            utility,
        }
    }

    /// Gets the wrapped state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Consumes the node, returning its state
    pub fn into_state(self) -> S {
        self.state
    }

    /// Distance from the root, which has depth 0
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Action that produced this node, `None` for a root
    pub fn action(&self) -> Option<&S::Action> {
        self.action.as_ref()
    }

    /// Construction id of the parent node
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Gets the construction id
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Heuristic evaluated when the node was created
    pub fn heuristic(&self) -> Option<f64> {
        self.heuristic
    }

    /// Utility for the root player, evaluated when the node was created
    pub fn utility(&self) -> Option<f64> {
        self.utility
    }

    /// Returns true if the wrapped state is terminal
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Overrides the construction id
    ///
    /// Only meant for building comparator fixtures.
    #[doc(hidden)]
    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = id;
        self
    }
}

impl<S: GameState> Clone for Node<S> {
    fn clone(&self) -> Self {
        Node {
            state: self.state.clone(),
            depth: self.depth,
            action: self.action.clone(),
            parent: self.parent,
            id: self.id,
            heuristic: self.heuristic,
            utility: self.utility,
        }
    }
}

impl<S: GameState + fmt::Debug> fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("depth", &self.depth)
            .field("action", &self.action)
            .field("heuristic", &self.heuristic)
            .field("utility", &self.utility)
            .field("state", &self.state)
            .finish()
    }
}

/// Compares nodes by utility, then depth
///
/// A node without utility loses against any node with one; otherwise the
/// greater utility wins, then the shallower node wins. `Greater` means `a`
/// is the better node.
pub fn compare_utility<S: GameState>(a: &Node<S>, b: &Node<S>) -> Ordering {
    compare_optional_f64(a.utility, b.utility).then_with(|| b.depth.cmp(&a.depth))
}

/// Total order used by the heuristic frontiers
///
/// Compares by heuristic (direction per `order`, missing heuristics rank
/// lowest), then [`compare_utility`], then construction id with the more
/// recently created node ranking higher. `Greater` is retrieved first.
///
/// # Panics
///
/// Panics when the nodes cannot be told apart: equal construction ids or an
/// unset id reaching the final tie-break. Ordered containers silently
/// corrupt under such a comparator, so this is treated as a bug.
pub fn compare_nodes<S: GameState>(a: &Node<S>, b: &Node<S>, order: HeuristicOrder) -> Ordering {
    let by_heuristic = match (order, a.heuristic, b.heuristic) {
        (HeuristicOrder::LowerIsBetter, Some(x), Some(y)) => y.total_cmp(&x),
        _ => compare_optional_f64(a.heuristic, b.heuristic),
    };
    by_heuristic
        .then_with(|| compare_utility(a, b))
        .then_with(|| {
            if a.id == b.id || a.id.is_unset() || b.id.is_unset() {
                panic!(
                    "node ordering is not total: cannot order {} against {}",
                    a.id, b.id
                );
            }
            a.id.cmp(&b.id)
        })
}
