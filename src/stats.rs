//! Benchmark counters collected during a search
//!
//! Every algorithm owns one [`Benchmark`]; it is written while the search
//! runs and meant to be read once the run (or an iteration of it) is over.

use std::time::Duration;

/// Counters collected during a search run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Benchmark {
    /// Successor nodes generated, including those not enqueued
    pub seen_nodes: u64,

    /// Nodes retrieved from the frontier (or evaluated by alpha-beta)
    pub processed_nodes: u64,

    /// Deepest depth at which a node was generated
    pub deepest_depth: u32,

    /// Depth of the iteration that produced the current best move
    pub best_move_depth: Option<u32>,

    /// Value of the current best move
    pub best_move_heuristic: Option<f64>,

    /// Transposition table hits that avoided a subtree search
    pub transposition_hits: u64,

    /// Completed iterations (MTD(f) depth iterations, IDS passes are not counted)
    pub iterations: u32,

    /// Total time spent searching
    pub total_time: Duration,
}

impl Benchmark {
    /// Creates a new, empty benchmark
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a node was generated at `depth`
    pub fn record_seen(&mut self, depth: u32) {
        self.seen_nodes += 1;
        self.deepest_depth = self.deepest_depth.max(depth);
    }

    /// Folds the counters of an inner run into this one
    ///
    /// Counts are summed; the best-move fields are taken from `inner` when it
    /// has them.
    pub fn absorb(&mut self, inner: &Benchmark) {
        self.seen_nodes += inner.seen_nodes;
        self.processed_nodes += inner.processed_nodes;
        self.deepest_depth = self.deepest_depth.max(inner.deepest_depth);
        self.transposition_hits += inner.transposition_hits;
        if inner.best_move_depth.is_some() {
            self.best_move_depth = inner.best_move_depth;
            self.best_move_heuristic = inner.best_move_heuristic;
        }
    }

    /// Returns the number of processed nodes per second
    pub fn nodes_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.processed_nodes as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the counters as a string
    pub fn summary(&self) -> String {
        let best_depth = self
            .best_move_depth
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        let best_value = self
            .best_move_heuristic
            .map_or_else(|| "-".to_string(), |v| format!("{:.3}", v));
        format!(
            "Search Benchmark:\n\
             - Seen nodes: {}\n\
             - Processed nodes: {}\n\
             - Deepest depth: {}\n\
             - Best move depth: {}\n\
             - Best move value: {}\n\
             - Transposition hits: {}\n\
             - Iterations: {}\n\
             - Total time: {:.3} seconds\n\
             - Nodes per second: {:.1}",
            self.seen_nodes,
            self.processed_nodes,
            self.deepest_depth,
            best_depth,
            best_value,
            self.transposition_hits,
            self.iterations,
            self.total_time.as_secs_f64(),
            self.nodes_per_second()
        )
    }
}
