mod common;

use std::time::{Duration, Instant};

use common::{init_logging, ConnectThree, Hanoi, Synthetic};
use gamesearch::{
    AlphaBeta, CancellationToken, Mtdf, SearchAlgorithm, SearchConfig, SingleAgentSearch,
};

#[test]
fn test_time_limited_search() {
    init_logging();
    // A goal-less tree far too large to exhaust
    let root = Synthetic::new(4, 40);
    let token = CancellationToken::new();
    let mut ids = SingleAgentSearch::iterative_deepening(root, SearchConfig::default())
        .with_cancellation_token(token.clone());

    let time_limit = Duration::from_millis(100);
    let timer = token.cancel_after(time_limit);

    let start = Instant::now();
    let winnable = ids.is_winnable();
    let elapsed = start.elapsed();
    timer.join().unwrap();

    // Cancellation leaves the question open
    assert_eq!(winnable, None);
    assert!(!ids.is_finished());
    assert!(elapsed >= time_limit);
    assert!(
        elapsed < time_limit * 20,
        "search took {:?}, far beyond the {:?} limit",
        elapsed,
        time_limit
    );
    assert!(ids.get_benchmark().processed_nodes > 0);
    println!("{}", ids.get_benchmark().summary());
}

#[test]
fn test_cancelled_before_start_does_no_work() {
    let mut bfs = SingleAgentSearch::breadth_first(Hanoi::new(3), SearchConfig::default());
    bfs.cancellation_token().cancel();

    assert_eq!(bfs.is_winnable(), None);
    assert_eq!(bfs.terminal_state(), None);
    assert_eq!(bfs.get_benchmark().processed_nodes, 0);
    assert!(!bfs.is_exhausted());
}

#[test]
fn test_cancel_from_another_thread() {
    let token = CancellationToken::new();
    let remote = token.clone();
    assert!(!token.is_cancelled());

    std::thread::spawn(move || remote.cancel()).join().unwrap();
    assert!(token.is_cancelled());

    let mut mtdf = Mtdf::new(ConnectThree::new(), SearchConfig::default().with_depth_limit(12))
        .unwrap()
        .with_cancellation_token(token);
    assert!(mtdf.best_move().is_some());
    assert_eq!(mtdf.completed_depth(), 1);
}

#[test]
fn test_time_limited_mtdf_keeps_last_completed_depth() {
    let mut mtdf = Mtdf::new(ConnectThree::new(), SearchConfig::default().with_depth_limit(12))
        .unwrap();
    let timer = mtdf.cancellation_token().cancel_after(Duration::from_millis(50));

    let best = mtdf.best_move();
    timer.join().unwrap();

    assert!(best.is_some());
    assert!(mtdf.completed_depth() >= 1);
    assert_eq!(
        mtdf.get_benchmark().best_move_depth,
        Some(mtdf.completed_depth())
    );
}

#[test]
fn test_fixed_depth_alpha_beta_ignores_cancellation() {
    let config = SearchConfig::default().with_depth_limit(4);
    let mut reference = AlphaBeta::new(ConnectThree::new(), config.clone()).unwrap();
    let expected = reference.best_move();

    let mut cancelled = AlphaBeta::new(ConnectThree::new(), config).unwrap();
    cancelled.cancellation_token().cancel();

    assert_eq!(cancelled.best_move(), expected);
    assert!(cancelled.is_finished());
    assert_eq!(
        cancelled.get_benchmark().processed_nodes,
        reference.get_benchmark().processed_nodes
    );
}
