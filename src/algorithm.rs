//! The caller-facing algorithm interface and algorithm selection
//!
//! Every algorithm answers the same set of queries; the ones it cannot
//! compute come back as `None`. [`AlgorithmKind`] lets a caller pick an
//! algorithm from the result it wants and the capabilities the game
//! declares, before anything is built.

use std::fmt;

use crate::{
    adversarial::{AlphaBeta, Mtdf},
    cancel::CancellationToken,
    config::SearchConfig,
    game_state::{Capabilities, GameState},
    search::SingleAgentSearch,
    stats::Benchmark,
    Result, SearchError,
};

/// Kinds of result a caller can ask an algorithm for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// Action sequence from the root to a terminal state
    Moves,
    /// State sequence from the root to a terminal state
    StateSequence,
    /// Some reachable terminal state
    TerminalState,
    /// Best move for the player to move at the root
    BestMove,
    /// Whether any terminal state is reachable
    Winnable,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultKind::Moves => "moves",
            ResultKind::StateSequence => "state sequence",
            ResultKind::TerminalState => "terminal state",
            ResultKind::BestMove => "best move",
            ResultKind::Winnable => "winnable",
        };
        f.write_str(name)
    }
}

/// Queries shared by all search algorithms
///
/// Queries that need a search run it on demand. A query the algorithm
/// cannot answer returns `None`; use [`is_applicable`](Self::is_applicable)
/// to find out beforehand.
pub trait SearchAlgorithm<S: GameState>: Send {
    /// Human readable algorithm name
    fn name(&self) -> &'static str;

    /// Returns true if this algorithm can produce results of `kind`
    fn is_applicable(&self, kind: ResultKind) -> bool;

    fn moves(&mut self) -> Option<Vec<S::Action>> {
        None
    }

    fn state_sequence(&mut self) -> Option<Vec<S>> {
        None
    }

    fn terminal_state(&mut self) -> Option<S> {
        None
    }

    fn best_move(&mut self) -> Option<S::Action> {
        None
    }

    /// `Some(true)` if a terminal is reachable, `Some(false)` if provably not,
    /// `None` if not determined (cancelled or not supported)
    fn is_winnable(&mut self) -> Option<bool> {
        None
    }

    /// True once further searching cannot change the results
    fn is_finished(&self) -> bool;

    fn get_benchmark(&self) -> &Benchmark;

    /// A clone of the token this algorithm polls for cancellation
    fn cancellation_token(&self) -> CancellationToken;
}

/// The algorithms this crate provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    BreadthFirst,
    BreadthFirstUnreduced,
    DepthFirst,
    IterativeDeepening,
    AStar,
    AStarTree,
    AlphaBeta,
    Mtdf,
}

impl AlgorithmKind {
    /// All kinds, in selection preference order
    pub const ALL: [AlgorithmKind; 8] = [
        AlgorithmKind::AStar,
        AlgorithmKind::AStarTree,
        AlgorithmKind::BreadthFirst,
        AlgorithmKind::DepthFirst,
        AlgorithmKind::IterativeDeepening,
        AlgorithmKind::BreadthFirstUnreduced,
        AlgorithmKind::Mtdf,
        AlgorithmKind::AlphaBeta,
    ];

    /// Name reported by the built algorithm
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::BreadthFirst => "breadth-first",
            AlgorithmKind::BreadthFirstUnreduced => "breadth-first (unreduced)",
            AlgorithmKind::DepthFirst => "depth-first",
            AlgorithmKind::IterativeDeepening => "iterative deepening",
            AlgorithmKind::AStar => "a-star",
            AlgorithmKind::AStarTree => "a-star (tree)",
            AlgorithmKind::AlphaBeta => "alpha-beta",
            AlgorithmKind::Mtdf => "mtd(f)",
        }
    }

    /// Result kinds the algorithm can produce, regardless of the game
    pub fn produces(self, kind: ResultKind) -> bool {
        use ResultKind::*;
        match self {
            AlgorithmKind::BreadthFirst
            | AlgorithmKind::DepthFirst
            | AlgorithmKind::AStar
            | AlgorithmKind::AStarTree => {
                matches!(kind, Moves | StateSequence | TerminalState | Winnable)
            }
            AlgorithmKind::BreadthFirstUnreduced | AlgorithmKind::IterativeDeepening => {
                matches!(kind, TerminalState | Winnable)
            }
            AlgorithmKind::AlphaBeta | AlgorithmKind::Mtdf => kind == BestMove,
        }
    }

    /// Returns true if the algorithm can produce `kind` for a game with `caps`
    pub fn is_applicable(self, kind: ResultKind, caps: &Capabilities) -> bool {
        if !self.produces(kind) || !caps.has_successors() {
            return false;
        }
        match self {
            AlgorithmKind::AStar | AlgorithmKind::AStarTree => {
                caps.has_terminal() && caps.has_heuristic()
            }
            AlgorithmKind::AlphaBeta | AlgorithmKind::Mtdf => {
                caps.has_utility_player() || caps.has_heuristic()
            }
            _ => caps.has_terminal(),
        }
    }

    /// Builds the algorithm for `root`
    ///
    /// Fails with the algorithm's own configuration errors, e.g. a missing
    /// depth limit for the adversarial searches.
    pub fn build<S>(self, root: S, config: SearchConfig) -> Result<Box<dyn SearchAlgorithm<S>>>
    where
        S: GameState + 'static,
    {
        let algorithm: Box<dyn SearchAlgorithm<S>> = match self {
            AlgorithmKind::BreadthFirst => Box::new(SingleAgentSearch::breadth_first(root, config)),
            AlgorithmKind::BreadthFirstUnreduced => {
                Box::new(SingleAgentSearch::breadth_first_unreduced(root, config))
            }
            AlgorithmKind::DepthFirst => Box::new(SingleAgentSearch::depth_first(root, config)),
            AlgorithmKind::IterativeDeepening => {
                Box::new(SingleAgentSearch::iterative_deepening(root, config))
            }
            AlgorithmKind::AStar => Box::new(SingleAgentSearch::a_star(root, config)),
            AlgorithmKind::AStarTree => Box::new(SingleAgentSearch::a_star_tree(root, config)),
            AlgorithmKind::AlphaBeta => Box::new(AlphaBeta::new(root, config)?),
            AlgorithmKind::Mtdf => Box::new(Mtdf::new(root, config)?),
        };
        Ok(algorithm)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Picks the preferred algorithm able to produce `kind` for a game with `caps`
pub fn select_algorithm(kind: ResultKind, caps: &Capabilities) -> Option<AlgorithmKind> {
    AlgorithmKind::ALL
        .into_iter()
        .find(|algorithm| algorithm.is_applicable(kind, caps))
}

/// Selects and builds an algorithm for `kind`, using the root's capabilities
///
/// Returns [`SearchError::NotApplicable`] when no algorithm fits.
pub fn solver_for<S>(
    kind: ResultKind,
    root: S,
    config: SearchConfig,
) -> Result<Box<dyn SearchAlgorithm<S>>>
where
    S: GameState + 'static,
{
    let caps = root.capabilities();
    let algorithm = select_algorithm(kind, &caps).ok_or(SearchError::NotApplicable {
        algorithm: "any",
        result: kind,
    })?;
    log::debug!("selected {} for {} ({:?})", algorithm, kind, caps);
    algorithm.build(root, config)
}
