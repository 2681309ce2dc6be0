//! Iterative-deepening MTD(f)
//!
//! Each depth iteration converges on the minimax value through a series of
//! null-window alpha-beta searches, seeded with the previous iteration's
//! value. The transposition table is cleared before every iteration.

use std::time::Instant;

use super::alpha_beta::AlphaBeta;
use crate::{
    algorithm::{ResultKind, SearchAlgorithm},
    cancel::CancellationToken,
    config::SearchConfig,
    game_state::GameState,
    stats::Benchmark,
    Result, SearchError,
};

/// Iterative-deepening MTD(f) search
pub struct Mtdf<S: GameState> {
    inner: AlphaBeta<S>,
    depth_limit: u32,
    first_guess: f64,
    best_move: Option<S::Action>,
    best_value: Option<f64>,
    completed_depth: u32,
    searched: bool,
    exhausted: bool,
    benchmark: Benchmark,
    cancel: CancellationToken,
}

impl<S: GameState> Mtdf<S> {
    /// Creates an MTD(f) search up to `config.depth_limit`
    ///
    /// Fails with [`SearchError::InvalidConfiguration`] unless the depth
    /// limit is at least 1.
    pub fn new(root: S, config: SearchConfig) -> Result<Self> {
        let depth_limit = match config.depth_limit {
            Some(depth) if depth > 0 => depth,
            other => {
                return Err(SearchError::InvalidConfiguration(format!(
                    "mtd(f) needs a depth limit of at least 1, got {:?}",
                    other
                )))
            }
        };
        Ok(Mtdf {
            inner: AlphaBeta::new(root, config)?,
            depth_limit,
            first_guess: 0.0,
            best_move: None,
            best_value: None,
            completed_depth: 0,
            searched: false,
            exhausted: false,
            benchmark: Benchmark::new(),
            cancel: CancellationToken::new(),
        })
    }

    /// Sets the guess the first depth iteration starts from
    pub fn with_first_guess(mut self, guess: f64) -> Self {
        self.first_guess = guess;
        self
    }

    /// Makes this search poll `token` instead of its own token
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Value of the deepest completed iteration
    pub fn best_value(&self) -> Option<f64> {
        self.best_value
    }

    /// Deepest fully completed depth iteration, 0 before the first
    pub fn completed_depth(&self) -> u32 {
        self.completed_depth
    }

    /// Runs the depth iterations once, if they have not run yet
    ///
    /// Cancellation is checked after each iteration, so at least depth 1
    /// always completes.
    pub fn search(&mut self) -> Option<S::Action> {
        if self.searched {
            return self.best_move.clone();
        }
        let start = Instant::now();

        for depth in 1..=self.depth_limit {
            self.inner.begin_iteration();
            let (value, best_move) = self.mtdf(self.first_guess, depth);
            self.first_guess = value;

            let mut iteration = self.inner.take_benchmark();
            iteration.best_move_depth = Some(depth);
            iteration.best_move_heuristic = Some(value);
            self.benchmark.absorb(&iteration);
            self.benchmark.iterations += 1;

            self.best_move = best_move;
            self.best_value = Some(value);
            self.completed_depth = depth;
            log::debug!(
                "mtd(f) depth {}: value {} move {:?} ({} table entries)",
                depth,
                value,
                self.best_move,
                self.inner.table().len()
            );

            if !self.inner.depth_cut() {
                log::debug!("mtd(f): game tree exhausted at depth {}", depth);
                self.exhausted = true;
                break;
            }
            if self.cancel.is_cancelled() {
                log::debug!("mtd(f): cancelled after depth {}", depth);
                break;
            }
        }

        self.benchmark.total_time += start.elapsed();
        self.searched = true;
        self.best_move.clone()
    }

    /// Converges on the minimax value at `depth` starting from `first_guess`
    fn mtdf(&mut self, first_guess: f64, depth: u32) -> (f64, Option<S::Action>) {
        let mut g = first_guess;
        let mut lower = f64::NEG_INFINITY;
        let mut upper = f64::INFINITY;
        let mut proven_move = None;
        let mut last_move = None;

        while lower < upper {
            let beta = if g == lower { g + 1.0 } else { g };
            let result = self.inner.search_window(depth, beta - 1.0, beta);
            log::trace!(
                "mtd(f) depth {}: window [{}, {}] -> {}",
                depth,
                beta - 1.0,
                beta,
                result.value
            );
            if result.value < beta {
                upper = result.value;
            } else {
                lower = result.value;
                proven_move = result.best_move.clone();
            }
            last_move = result.best_move;
            g = result.value;
        }

        (g, proven_move.or(last_move))
    }
}

impl<S: GameState> SearchAlgorithm<S> for Mtdf<S> {
    fn name(&self) -> &'static str {
        "mtd(f)"
    }

    fn is_applicable(&self, kind: ResultKind) -> bool {
        kind == ResultKind::BestMove
    }

    fn best_move(&mut self) -> Option<S::Action> {
        self.search()
    }

    fn is_finished(&self) -> bool {
        self.exhausted || self.completed_depth == self.depth_limit
    }

    fn get_benchmark(&self) -> &Benchmark {
        &self.benchmark
    }

    fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}
