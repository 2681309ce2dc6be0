//! Traits defining the game state representation consumed by the search engine.
//!
//! The GameState trait is the only interface a puzzle or game must implement
//! to be searched. Optional evaluators (heuristic, utility) are advertised
//! through [`Capabilities`] so algorithms can be gated before they run.

use std::fmt::Debug;
use std::hash::Hash;

use crate::config::MemorySavingMode;

/// Trait for actions that can be taken in a game
///
/// Actions represent the moves or decisions that lead from one state to another.
pub trait Action: Clone + Debug + PartialEq + Send + Sync {}

/// Trait for players in a game
pub trait Player: Clone + Debug + PartialEq + Send + Sync {}

/// Boolean capability flags a game declares about itself.
///
/// Algorithm selection consults these before an algorithm is built, see
/// [`crate::algorithm::AlgorithmKind::is_applicable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The game can enumerate successor states
    pub successors: bool,
    /// The game can decide whether a state is terminal
    pub terminal: bool,
    /// [`GameState::heuristic`] returns meaningful values
    pub heuristic: bool,
    /// [`GameState::utility`] returns meaningful values
    pub utility_player: bool,
}

impl Capabilities {
    /// Capabilities of a game that only exposes its transition function
    pub const fn transitions_only() -> Self {
        Capabilities {
            successors: true,
            terminal: true,
            heuristic: false,
            utility_player: false,
        }
    }

    /// Declares a meaningful heuristic
    pub fn with_heuristic(mut self) -> Self {
        self.heuristic = true;
        self
    }

    /// Declares a meaningful utility
    pub fn with_utility(mut self) -> Self {
        self.utility_player = true;
        self
    }

    /// Can the game enumerate successors?
    pub fn has_successors(&self) -> bool {
        self.successors
    }

    /// Can the game recognise terminal states?
    pub fn has_terminal(&self) -> bool {
        self.terminal
    }

    /// Does the game provide a heuristic?
    pub fn has_heuristic(&self) -> bool {
        self.heuristic
    }

    /// Does the game provide per-player utilities?
    pub fn has_utility_player(&self) -> bool {
        self.utility_player
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::transitions_only()
    }
}

/// Trait defining the state-transition model required by every algorithm
///
/// States double as their own lookup key: equal states are treated as the
/// same search-tree vertex and the same transposition-table entry, so the
/// `Eq` and `Hash` implementations must agree with the game's notion of
/// "same position".
pub trait GameState: Clone + Eq + Hash + Send + Sync {
    /// The type of actions that can be taken in this game
    type Action: Action;

    /// The type of players in this game
    type Player: Player;

    /// Returns the list of legal actions from this state
    ///
    /// The order of the returned actions is the order successors are
    /// generated and explored in, so it should be deterministic.
    fn get_legal_actions(&self) -> Vec<Self::Action>;

    /// Applies an action to a copy of the current state, returning the new state
    ///
    /// This must not modify `self`; the engine relies on states being
    /// immutable once they are wrapped in a node.
    fn apply_action(&self, action: &Self::Action) -> Self;

    /// Returns true if this state is terminal (goal reached or game over)
    fn is_terminal(&self) -> bool;

    /// Returns the player whose turn it is in this state
    fn get_current_player(&self) -> Self::Player;

    /// Returns every successor of this state paired with the action producing it
    ///
    /// The default applies each legal action to a copy of the state and
    /// ignores `mode`. Games that can rebuild states on demand may override
    /// this to honor [`MemorySavingMode::Recompute`].
    fn successors(&self, mode: MemorySavingMode) -> Vec<(Self::Action, Self)> {
        let _ = mode;
        self.get_legal_actions()
            .into_iter()
            .map(|action| {
                let next = self.apply_action(&action);
                (action, next)
            })
            .collect()
    }

    /// Heuristic evaluation of this state, if the game provides one
    ///
    /// Whether larger or smaller values are better is configured through
    /// [`crate::config::HeuristicOrder`].
    fn heuristic(&self) -> Option<f64> {
        None
    }

    /// Utility of this state from the perspective of `for_player`, if known
    ///
    /// Larger is better for `for_player`.
    fn utility(&self, for_player: &Self::Player) -> Option<f64> {
        let _ = for_player;
        None
    }

    /// Declares which optional parts of this trait are meaningful
    fn capabilities(&self) -> Capabilities {
        Capabilities::transitions_only()
    }
}

/// Simplified implementation of Player trait for common types
impl Player for usize {}
impl Player for u8 {}
impl Player for i32 {}
impl Player for char {}
impl Player for String {}

/// Unit marker for single-agent puzzles with no explicit player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoPlayer;

impl Player for NoPlayer {}

impl Action for usize {}
impl Action for u8 {}
impl Action for (usize, usize) {}
