//! Frontier-driven single-agent search
//!
//! One expansion loop serves every single-agent algorithm. What varies is
//! the frontier (which decides the expansion order) and the
//! [`ExpansionMode`] (which decides what happens to each successor).

use std::time::Instant;

use crate::{
    algorithm::{ResultKind, SearchAlgorithm},
    cancel::CancellationToken,
    config::SearchConfig,
    frontier::{
        FifoFrontier, Frontier, IterativeDeepeningFrontier, LifoFrontier, SortedListFrontier,
        TreeFrontier,
    },
    game_state::GameState,
    node::{compare_utility, Node},
    stats::Benchmark,
    tree::SearchTree,
};

/// What the expansion loop does with each generated successor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionMode {
    /// Enqueue every successor without a membership check
    ///
    /// Terminates only when the reachable space is acyclic up to the depth
    /// limit (or the frontier bounds depth itself). No paths are kept.
    Unreduced,

    /// Enqueue successors whose state has not been recorded yet, recording
    /// the edge in a [`SearchTree`] so paths can be rebuilt
    Path,
}

/// Single-agent search over a pluggable frontier
///
/// # Example
///
/// ```
/// use gamesearch::{GameState, SearchAlgorithm, SearchConfig, SingleAgentSearch};
///
/// // Count up from 0 to 3 by steps of +1 or +2.
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// struct Counter(u8);
///
/// impl GameState for Counter {
///     type Action = u8;
///     type Player = gamesearch::NoPlayer;
///
///     fn get_legal_actions(&self) -> Vec<u8> {
///         if self.0 >= 3 { vec![] } else { vec![1, 2] }
///     }
///     fn apply_action(&self, step: &u8) -> Self {
///         Counter(self.0 + step)
///     }
///     fn is_terminal(&self) -> bool {
///         self.0 == 3
///     }
///     fn get_current_player(&self) -> gamesearch::NoPlayer {
///         gamesearch::NoPlayer
///     }
/// }
///
/// let mut bfs = SingleAgentSearch::breadth_first(Counter(0), SearchConfig::default());
/// assert_eq!(bfs.moves(), Some(vec![1, 2]));
/// ```
pub struct SingleAgentSearch<S: GameState> {
    name: &'static str,
    root: S,
    frontier: Box<dyn Frontier<S>>,
    mode: ExpansionMode,
    tree: Option<SearchTree<S>>,
    perspective: S::Player,
    config: SearchConfig,
    best_terminal: Option<Node<S>>,
    exhausted: bool,
    benchmark: Benchmark,
    cancel: CancellationToken,
}

impl<S: GameState + 'static> SingleAgentSearch<S> {
    /// Breadth-first search with duplicate detection; finds shortest paths
    pub fn breadth_first(root: S, config: SearchConfig) -> Self {
        Self::with_frontier("breadth-first", root, FifoFrontier::new(), ExpansionMode::Path, config)
    }

    /// Breadth-first search without duplicate detection
    pub fn breadth_first_unreduced(root: S, config: SearchConfig) -> Self {
        Self::with_frontier(
            "breadth-first (unreduced)",
            root,
            FifoFrontier::new(),
            ExpansionMode::Unreduced,
            config,
        )
    }

    /// Depth-first search with duplicate detection
    pub fn depth_first(root: S, config: SearchConfig) -> Self {
        Self::with_frontier("depth-first", root, LifoFrontier::new(), ExpansionMode::Path, config)
    }

    /// Iterative deepening depth-first search
    ///
    /// Runs unreduced: every pass regenerates the tree from the root, so
    /// only terminal-state and winnability queries are answered.
    pub fn iterative_deepening(root: S, config: SearchConfig) -> Self {
        Self::with_frontier(
            "iterative deepening",
            root,
            IterativeDeepeningFrontier::new(),
            ExpansionMode::Unreduced,
            config,
        )
    }

    /// Best-first search over a sorted list
    ///
    /// Nodes are ordered by the game's heuristic alone, so the heuristic
    /// should already account for the path cost when optimal paths matter.
    pub fn a_star(root: S, config: SearchConfig) -> Self {
        let frontier = SortedListFrontier::new(config.heuristic_order);
        Self::with_frontier("a-star", root, frontier, ExpansionMode::Path, config)
    }

    /// Best-first search over a balanced tree; same order as [`a_star`](Self::a_star)
    pub fn a_star_tree(root: S, config: SearchConfig) -> Self {
        let frontier = TreeFrontier::new(config.heuristic_order);
        Self::with_frontier("a-star (tree)", root, frontier, ExpansionMode::Path, config)
    }

    /// Builds a search from an arbitrary frontier and mode
    pub fn with_frontier<F>(
        name: &'static str,
        root: S,
        frontier: F,
        mode: ExpansionMode,
        config: SearchConfig,
    ) -> Self
    where
        F: Frontier<S> + 'static,
    {
        let perspective = root.get_current_player();
        let root_node = Node::root(root.clone(), Some(&perspective));

        let mut frontier: Box<dyn Frontier<S>> = Box::new(frontier);
        let tree = match mode {
            ExpansionMode::Path => {
                let mut tree = SearchTree::new();
                tree.insert_root(&root_node);
                Some(tree)
            }
            ExpansionMode::Unreduced => None,
        };
        frontier.add(root_node);

        SingleAgentSearch {
            name,
            root,
            frontier,
            mode,
            tree,
            perspective,
            config,
            best_terminal: None,
            exhausted: false,
            benchmark: Benchmark::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Makes this search poll `token` instead of its own token
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }
}

impl<S: GameState> SingleAgentSearch<S> {
    /// Runs the expansion loop until a better terminal is found, the
    /// frontier is exhausted, or the search is cancelled
    ///
    /// Calling it again resumes where the previous call stopped; once the
    /// frontier is exhausted further calls do nothing.
    pub fn search(&mut self) {
        if self.exhausted {
            return;
        }
        let start = Instant::now();
        log::debug!(
            "{}: searching ({} nodes in {} frontier)",
            self.name,
            self.frontier.len(),
            self.frontier.name()
        );

        loop {
            if self.cancel.is_cancelled() {
                log::debug!("{}: cancelled", self.name);
                break;
            }
            if !self.frontier.has_next() {
                self.exhausted = true;
                log::debug!("{}: frontier exhausted", self.name);
                break;
            }
            let node = match self.frontier.retrieve_next() {
                Ok(node) => node,
                Err(_) => {
                    self.exhausted = true;
                    break;
                }
            };
            self.benchmark.processed_nodes += 1;
            log::trace!("{}: expanding {} at depth {}", self.name, node.id(), node.depth());

            if node.is_terminal() && self.improves_best(&node) {
                log::debug!(
                    "{}: terminal found at depth {} after {} nodes",
                    self.name,
                    node.depth(),
                    self.benchmark.processed_nodes
                );
                self.benchmark.best_move_depth = Some(node.depth());
                self.benchmark.best_move_heuristic = node.heuristic();
                self.best_terminal = Some(node);
                break;
            }

            self.expand(&node);
        }

        self.benchmark.total_time += start.elapsed();
    }

    fn improves_best(&self, node: &Node<S>) -> bool {
        match &self.best_terminal {
            None => true,
            Some(best) => compare_utility(node, best).is_gt(),
        }
    }

    fn expand(&mut self, node: &Node<S>) {
        let successors = node.state().successors(self.config.memory_saving_mode);
        for (action, state) in successors {
            let child = node.child(action, state, Some(&self.perspective));
            self.benchmark.record_seen(child.depth());
            match self.mode {
                ExpansionMode::Unreduced => self.handle_unreduced(child),
                ExpansionMode::Path => self.handle_path(node, child),
            }
        }
    }

    fn within_limit(&self, child: &Node<S>) -> bool {
        self.config
            .effective_depth_limit()
            .map_or(true, |limit| child.depth() <= limit)
    }

    fn handle_unreduced(&mut self, child: Node<S>) {
        if self.within_limit(&child) {
            self.frontier.add(child);
        }
    }

    fn handle_path(&mut self, parent: &Node<S>, child: Node<S>) {
        if !self.within_limit(&child) {
            return;
        }
        let Some(tree) = self.tree.as_mut() else {
            return;
        };
        if tree.contains(&child) {
            return;
        }
        match tree.insert(parent, &child) {
            Ok(()) => self.frontier.add(child),
            Err(err) => log::warn!("{}: dropping successor {}: {}", self.name, child.id(), err),
        }
    }

    fn ensure_searched(&mut self) {
        if self.best_terminal.is_none() {
            self.search();
        }
    }

    /// The root state this search started from
    pub fn root(&self) -> &S {
        &self.root
    }

    /// What happens to generated successors
    pub fn mode(&self) -> ExpansionMode {
        self.mode
    }

    /// The search tree, present in [`ExpansionMode::Path`]
    pub fn search_tree(&self) -> Option<&SearchTree<S>> {
        self.tree.as_ref()
    }

    /// The best terminal node found so far, without searching
    pub fn best_terminal(&self) -> Option<&Node<S>> {
        self.best_terminal.as_ref()
    }

    /// True once the frontier has run dry
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<S: GameState> SearchAlgorithm<S> for SingleAgentSearch<S> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_applicable(&self, kind: ResultKind) -> bool {
        match kind {
            ResultKind::TerminalState | ResultKind::Winnable => true,
            ResultKind::Moves | ResultKind::StateSequence => self.mode == ExpansionMode::Path,
            ResultKind::BestMove => false,
        }
    }

    fn moves(&mut self) -> Option<Vec<S::Action>> {
        if !self.is_applicable(ResultKind::Moves) {
            return None;
        }
        self.ensure_searched();
        let best = self.best_terminal.as_ref()?;
        let tree = self.tree.as_ref()?;
        tree.get_path_to_as_actions(best).ok()
    }

    fn state_sequence(&mut self) -> Option<Vec<S>> {
        if !self.is_applicable(ResultKind::StateSequence) {
            return None;
        }
        self.ensure_searched();
        let best = self.best_terminal.as_ref()?;
        let tree = self.tree.as_ref()?;
        tree.get_path_to(best).ok()
    }

    fn terminal_state(&mut self) -> Option<S> {
        self.ensure_searched();
        self.best_terminal.as_ref().map(|node| node.state().clone())
    }

    fn is_winnable(&mut self) -> Option<bool> {
        loop {
            if self.best_terminal.is_some() {
                return Some(true);
            }
            if self.exhausted {
                return Some(false);
            }
            if self.cancel.is_cancelled() {
                return None;
            }
            self.search();
        }
    }

    fn is_finished(&self) -> bool {
        self.best_terminal.is_some() || self.exhausted
    }

    fn get_benchmark(&self) -> &Benchmark {
        &self.benchmark
    }

    fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}
