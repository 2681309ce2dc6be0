//! # gamesearch
//!
//! Generic search over state-transition models: single-agent puzzles
//! (find a path to a terminal state) and adversarial games (pick the best
//! move), given only a [`GameState`] implementation.
//!
//! ## Features
//!
//! - One expansion loop for every single-agent algorithm, parameterised by
//!   a frontier (FIFO, LIFO, iterative deepening, sorted list, balanced tree)
//! - A total node order (heuristic, utility, depth, construction id) so
//!   best-first searches are deterministic
//! - A re-parentable search tree that rebuilds paths on demand
//! - Iterative-deepening MTD(f) over alpha-beta with a transposition table
//! - Cooperative cancellation through [`CancellationToken`]
//! - Algorithm selection from the requested [`ResultKind`] and the game's
//!   declared [`Capabilities`]
//!
//! ## Basic Usage
//!
//! ```
//! use gamesearch::{GameState, NoPlayer, ResultKind, SearchAlgorithm, SearchConfig};
//!
//! // Reach 10 from 1 by doubling or adding one.
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! struct Number(u32);
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Op {
//!     Double,
//!     Increment,
//! }
//!
//! impl gamesearch::Action for Op {}
//!
//! impl GameState for Number {
//!     type Action = Op;
//!     type Player = NoPlayer;
//!
//!     fn get_legal_actions(&self) -> Vec<Op> {
//!         if self.0 >= 10 {
//!             return vec![];
//!         }
//!         vec![Op::Double, Op::Increment]
//!     }
//!
//!     fn apply_action(&self, op: &Op) -> Self {
//!         match op {
//!             Op::Double => Number(self.0 * 2),
//!             Op::Increment => Number(self.0 + 1),
//!         }
//!     }
//!
//!     fn is_terminal(&self) -> bool {
//!         self.0 == 10
//!     }
//!
//!     fn get_current_player(&self) -> NoPlayer {
//!         NoPlayer
//!     }
//! }
//!
//! fn main() -> Result<(), gamesearch::SearchError> {
//!     let mut solver = gamesearch::solver_for(ResultKind::Moves, Number(1), SearchConfig::default())?;
//!     let moves = solver.moves().expect("10 is reachable from 1");
//!
//!     // 1 -> 2 -> 4 -> 5 -> 10
//!     assert_eq!(moves.len(), 4);
//!     println!("{}", solver.get_benchmark().summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Adversarial games
//!
//! [`Mtdf`] needs a depth limit and a game that implements
//! [`GameState::utility`] (or [`GameState::heuristic`]). Values are read from
//! the perspective of the player to move at the root:
//!
//! ```text
//! let mut mtdf = Mtdf::new(position, SearchConfig::default().with_depth_limit(6))?;
//! let token = mtdf.cancellation_token();
//! let best = mtdf.best_move();
//! ```

pub mod adversarial;
pub mod algorithm;
pub mod cancel;
pub mod config;
pub mod frontier;
pub mod game_state;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;
pub mod utils;

pub use adversarial::{AlphaBeta, Mtdf, TranspositionTable};
pub use algorithm::{select_algorithm, solver_for, AlgorithmKind, ResultKind, SearchAlgorithm};
pub use cancel::CancellationToken;
pub use config::{HeuristicOrder, MemorySavingMode, SearchConfig};
pub use frontier::Frontier;
pub use game_state::{Action, Capabilities, GameState, NoPlayer, Player};
pub use node::{compare_nodes, compare_utility, Node, NodeId};
pub use search::{ExpansionMode, SingleAgentSearch};
pub use stats::Benchmark;
pub use tree::SearchTree;

/// Error types for the search engine
///
/// Ordering inconsistencies (comparator ties, duplicate keys in a sorted
/// frontier) are bugs and panic instead of appearing here.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A frontier was asked for a node while empty
    #[error("frontier is empty")]
    EmptyFrontier,

    /// A node's state has not been recorded in the search tree
    #[error("node is not part of the search tree")]
    NodeNotInTree,

    /// Re-parenting would make a state its own ancestor
    #[error("re-parenting would create a cycle in the search tree")]
    CyclicParent,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No algorithm can produce the requested result
    #[error("{algorithm} cannot produce a {result} result")]
    NotApplicable {
        algorithm: &'static str,
        result: ResultKind,
    },
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
