//! Fail-soft minimax alpha-beta with a transposition table
//!
//! Max nodes are the states where the root player is to move; every other
//! player minimises the root player's value. Leaves are scored with the
//! root player's utility, falling back to the heuristic and then to 0.

use std::time::Instant;

use super::transposition::{Bound, TranspositionEntry, TranspositionTable};
use crate::{
    algorithm::{ResultKind, SearchAlgorithm},
    cancel::CancellationToken,
    config::{HeuristicOrder, SearchConfig},
    game_state::GameState,
    stats::Benchmark,
    utils::sanitize_value,
    Result, SearchError,
};

/// Outcome of one root search
#[derive(Debug, Clone)]
pub struct WindowResult<A> {
    /// Fail-soft value of the root
    pub value: f64,
    /// First root move reaching `value`, `None` if the root has no moves
    pub best_move: Option<A>,
}

/// Depth-limited alpha-beta search
///
/// Used standalone it runs a single full-window search to the configured
/// depth. [`Mtdf`](super::Mtdf) drives it with null windows instead.
///
/// A fixed-depth run is one unit of work: the cancellation token is never
/// polled, and a run always completes. Use [`Mtdf`](super::Mtdf) when the
/// search has to stop on request.
pub struct AlphaBeta<S: GameState> {
    root: S,
    root_player: S::Player,
    depth: u32,
    config: SearchConfig,
    table: TranspositionTable<S>,
    benchmark: Benchmark,
    depth_cut: bool,
    best_move: Option<S::Action>,
    searched: bool,
    cancel: CancellationToken,
}

impl<S: GameState> AlphaBeta<S> {
    /// Creates an alpha-beta search to `config.depth_limit`
    ///
    /// Fails with [`SearchError::InvalidConfiguration`] unless the depth
    /// limit is at least 1.
    pub fn new(root: S, config: SearchConfig) -> Result<Self> {
        let depth = match config.depth_limit {
            Some(depth) if depth > 0 => depth,
            other => {
                return Err(SearchError::InvalidConfiguration(format!(
                    "alpha-beta needs a depth limit of at least 1, got {:?}",
                    other
                )))
            }
        };
        let root_player = root.get_current_player();
        let table = TranspositionTable::new(config.transposition_capacity);
        Ok(AlphaBeta {
            root,
            root_player,
            depth,
            config,
            table,
            benchmark: Benchmark::new(),
            depth_cut: false,
            best_move: None,
            searched: false,
            cancel: CancellationToken::new(),
        })
    }

    /// The position being searched
    pub fn root(&self) -> &S {
        &self.root
    }

    /// The configured search depth
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Clears the transposition table and the depth-cut flag
    pub fn begin_iteration(&mut self) {
        self.table.clear();
        self.depth_cut = false;
    }

    /// True if some non-terminal state was scored because depth ran out
    /// since the last [`begin_iteration`](Self::begin_iteration)
    pub fn depth_cut(&self) -> bool {
        self.depth_cut
    }

    /// The transposition table of the current iteration
    pub fn table(&self) -> &TranspositionTable<S> {
        &self.table
    }

    /// Takes the counters collected so far, leaving fresh ones behind
    pub fn take_benchmark(&mut self) -> Benchmark {
        std::mem::take(&mut self.benchmark)
    }

    /// Searches the root to `depth` with window `(alpha, beta)`
    ///
    /// The root itself is never answered from the table so that a move is
    /// always available when the root has one.
    pub fn search_window(&mut self, depth: u32, alpha: f64, beta: f64) -> WindowResult<S::Action> {
        self.benchmark.processed_nodes += 1;
        let root = self.root.clone();

        if depth == 0 || root.is_terminal() {
            if depth == 0 && !root.is_terminal() {
                self.depth_cut = true;
            }
            return WindowResult {
                value: self.evaluate(&root),
                best_move: None,
            };
        }

        let successors = root.successors(self.config.memory_saving_mode);
        if successors.is_empty() {
            return WindowResult {
                value: self.evaluate(&root),
                best_move: None,
            };
        }

        let mut best = f64::NEG_INFINITY;
        let mut best_move = None;
        let mut a = alpha;
        for (action, child) in successors {
            self.benchmark.record_seen(1);
            let value = self.value(&child, depth - 1, 1, a, beta);
            if value > best {
                best = value;
                best_move = Some(action);
            }
            a = a.max(best);
            if best >= beta {
                break;
            }
        }

        WindowResult {
            value: best,
            best_move,
        }
    }

    fn value(&mut self, state: &S, depth: u32, ply: u32, alpha: f64, beta: f64) -> f64 {
        self.benchmark.processed_nodes += 1;

        if state.is_terminal() {
            return self.evaluate(state);
        }
        if depth == 0 {
            self.depth_cut = true;
            return self.evaluate(state);
        }
        if let Some(value) = self
            .table
            .lookup(state, depth)
            .and_then(|entry| entry.cutoff(alpha, beta))
        {
            self.benchmark.transposition_hits += 1;
            return value;
        }

        let successors = state.successors(self.config.memory_saving_mode);
        if successors.is_empty() {
            return self.evaluate(state);
        }

        let maximizing = state.get_current_player() == self.root_player;
        let (mut a, mut b) = (alpha, beta);
        let mut g = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for (_, child) in successors {
            self.benchmark.record_seen(ply + 1);
            let value = self.value(&child, depth - 1, ply + 1, a, b);
            if maximizing {
                g = g.max(value);
                a = a.max(g);
                if g >= beta {
                    break;
                }
            } else {
                g = g.min(value);
                b = b.min(g);
                if g <= alpha {
                    break;
                }
            }
        }

        self.table.store(
            state,
            depth,
            TranspositionEntry {
                value: g,
                bound: Bound::classify(g, alpha, beta),
            },
        );
        g
    }

    /// Scores a leaf from the root player's perspective
    fn evaluate(&self, state: &S) -> f64 {
        let raw = state.utility(&self.root_player).or_else(|| {
            state.heuristic().map(|h| match self.config.heuristic_order {
                HeuristicOrder::HigherIsBetter => h,
                HeuristicOrder::LowerIsBetter => -h,
            })
        });
        raw.map_or(0.0, sanitize_value)
    }

    /// Runs the full-window search once, if it has not run yet
    pub fn search(&mut self) -> Option<S::Action> {
        if self.searched {
            return self.best_move.clone();
        }
        let start = Instant::now();
        self.begin_iteration();
        let result = self.search_window(self.depth, f64::NEG_INFINITY, f64::INFINITY);
        log::debug!(
            "alpha-beta depth {}: value {} after {} nodes",
            self.depth,
            result.value,
            self.benchmark.processed_nodes
        );
        self.best_move = result.best_move;
        self.benchmark.best_move_depth = Some(self.depth);
        self.benchmark.best_move_heuristic = Some(result.value);
        self.benchmark.iterations = 1;
        self.benchmark.total_time += start.elapsed();
        self.searched = true;
        self.best_move.clone()
    }
}

impl<S: GameState> SearchAlgorithm<S> for AlphaBeta<S> {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn is_applicable(&self, kind: ResultKind) -> bool {
        kind == ResultKind::BestMove
    }

    fn best_move(&mut self) -> Option<S::Action> {
        self.search()
    }

    fn is_finished(&self) -> bool {
        self.searched
    }

    fn get_benchmark(&self) -> &Benchmark {
        &self.benchmark
    }

    /// A token for uniformity with the other algorithms; cancelling it has
    /// no effect on a fixed-depth run
    fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}
