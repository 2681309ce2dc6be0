//! Configuration options for the search algorithms
//!
//! This module defines the parameters shared by the single-agent and
//! adversarial searches.

/// Direction of the game's heuristic
///
/// Ordered frontiers always retrieve the "best" node first; this decides
/// what best means for the raw heuristic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeuristicOrder {
    /// Larger heuristic values are expanded first
    #[default]
    HigherIsBetter,

    /// Smaller heuristic values are expanded first (distance-to-goal estimates)
    LowerIsBetter,
}

/// How the game should produce successor states
///
/// The engine does not interpret this; it forwards it to
/// [`crate::GameState::successors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemorySavingMode {
    /// Every successor is a full copy of the state
    #[default]
    FullCopy,

    /// Successors may be recomputed from their parent on demand
    Recompute,
}

/// Default number of entries the transposition table may hold
pub const DEFAULT_TRANSPOSITION_CAPACITY: usize = 1 << 20;

/// Configuration for the search algorithms
///
/// # Example
///
/// ```
/// use gamesearch::{SearchConfig, HeuristicOrder};
///
/// let config = SearchConfig::default()
///     .with_depth_limit(6)
///     .with_transposition_capacity(50_000)
///     .with_heuristic_order(HeuristicOrder::LowerIsBetter);
///
/// assert_eq!(config.depth_limit, Some(6));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Maximum depth to search
    ///
    /// Single-agent searches treat `None` and `Some(0)` as unlimited. The
    /// adversarial searches require a limit of at least 1.
    pub depth_limit: Option<u32>,

    /// Maximum number of entries kept in the transposition table
    pub transposition_capacity: usize,

    /// Whether larger or smaller heuristic values are better
    pub heuristic_order: HeuristicOrder,

    /// Forwarded to the game when successors are requested
    pub memory_saving_mode: MemorySavingMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth_limit: None,
            transposition_capacity: DEFAULT_TRANSPOSITION_CAPACITY,
            heuristic_order: HeuristicOrder::HigherIsBetter,
            memory_saving_mode: MemorySavingMode::FullCopy,
        }
    }
}

impl SearchConfig {
    /// Sets the maximum depth to search
    pub fn with_depth_limit(mut self, depth: u32) -> Self {
        self.depth_limit = Some(depth);
        self
    }

    /// Sets the transposition table capacity
    pub fn with_transposition_capacity(mut self, capacity: usize) -> Self {
        self.transposition_capacity = capacity;
        self
    }

    /// Sets the heuristic direction
    pub fn with_heuristic_order(mut self, order: HeuristicOrder) -> Self {
        self.heuristic_order = order;
        self
    }

    /// Sets the memory saving mode forwarded to the game
    pub fn with_memory_saving_mode(mut self, mode: MemorySavingMode) -> Self {
        self.memory_saving_mode = mode;
        self
    }

    /// The depth limit as seen by single-agent searches, `None` when unlimited
    pub(crate) fn effective_depth_limit(&self) -> Option<u32> {
        self.depth_limit.filter(|&d| d > 0)
    }
}
