mod common;

use common::{Hanoi, Ring, TicTacToe};
use gamesearch::{
    select_algorithm, solver_for, AlgorithmKind, Capabilities, GameState, ResultKind,
    SearchConfig, SearchError,
};

#[test]
fn test_transitions_only_game_gets_breadth_first() {
    let caps = Capabilities::transitions_only();
    assert_eq!(
        select_algorithm(ResultKind::Moves, &caps),
        Some(AlgorithmKind::BreadthFirst)
    );
    assert_eq!(
        select_algorithm(ResultKind::TerminalState, &caps),
        Some(AlgorithmKind::BreadthFirst)
    );
    assert_eq!(select_algorithm(ResultKind::BestMove, &caps), None);
}

#[test]
fn test_heuristic_game_prefers_a_star() {
    let caps = Hanoi::new(3).capabilities();
    assert_eq!(
        select_algorithm(ResultKind::Moves, &caps),
        Some(AlgorithmKind::AStar)
    );
    // A heuristic is enough for the adversarial searches as well.
    assert_eq!(
        select_algorithm(ResultKind::BestMove, &caps),
        Some(AlgorithmKind::Mtdf)
    );
}

#[test]
fn test_applicability_follows_capabilities() {
    let bare = Capabilities::transitions_only();
    let with_utility = bare.with_utility();
    let no_successors = Capabilities {
        successors: false,
        ..bare.with_heuristic()
    };

    assert!(!AlgorithmKind::AStar.is_applicable(ResultKind::Moves, &bare));
    assert!(AlgorithmKind::Mtdf.is_applicable(ResultKind::BestMove, &with_utility));
    assert!(!AlgorithmKind::Mtdf.is_applicable(ResultKind::Moves, &with_utility));
    assert!(!AlgorithmKind::IterativeDeepening.is_applicable(ResultKind::Moves, &bare));
    assert!(AlgorithmKind::IterativeDeepening.is_applicable(ResultKind::Winnable, &bare));
    for kind in AlgorithmKind::ALL {
        assert!(!kind.is_applicable(ResultKind::TerminalState, &no_successors));
    }
}

#[test]
fn test_every_result_kind_has_a_producer() {
    let everything = Capabilities::transitions_only()
        .with_heuristic()
        .with_utility();
    for kind in [
        ResultKind::Moves,
        ResultKind::StateSequence,
        ResultKind::TerminalState,
        ResultKind::BestMove,
        ResultKind::Winnable,
    ] {
        let algorithm = select_algorithm(kind, &everything).expect("some algorithm fits");
        assert!(algorithm.produces(kind), "{} for {}", algorithm, kind);
    }
}

#[test]
fn test_solver_for_builds_a_working_algorithm() {
    let mut solver = solver_for(ResultKind::Moves, Hanoi::new(3), SearchConfig::default()).unwrap();
    assert_eq!(solver.name(), "a-star");
    assert!(solver.is_applicable(ResultKind::Moves));
    let moves = solver.moves().expect("hanoi is solvable");
    let end = moves
        .iter()
        .fold(Hanoi::new(3), |state, m| state.apply_action(m));
    assert!(end.is_terminal());
}

#[test]
fn test_solver_for_reports_unsupported_requests() {
    let ring = Ring {
        position: 0,
        size: 4,
        goal: Some(2),
    };
    match solver_for(ResultKind::BestMove, ring, SearchConfig::default()) {
        Err(SearchError::NotApplicable { result, .. }) => assert_eq!(result, ResultKind::BestMove),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(solver) => panic!("{} should not be selected", solver.name()),
    }
}

#[test]
fn test_build_surfaces_configuration_errors() {
    let result = solver_for(ResultKind::BestMove, TicTacToe::new(), SearchConfig::default());
    assert!(matches!(result, Err(SearchError::InvalidConfiguration(_))));

    let mut solver = solver_for(
        ResultKind::BestMove,
        TicTacToe::new(),
        SearchConfig::default().with_depth_limit(2),
    )
    .unwrap();
    assert_eq!(solver.name(), "mtd(f)");
    assert!(solver.best_move().is_some());
    assert_eq!(solver.moves(), None);
}

#[test]
fn test_algorithm_names_match_built_instances() {
    let config = SearchConfig::default().with_depth_limit(2);
    for kind in AlgorithmKind::ALL {
        let built = kind.build(TicTacToe::new(), config.clone()).unwrap();
        assert_eq!(built.name(), kind.name());
        for result in [ResultKind::Moves, ResultKind::BestMove, ResultKind::Winnable] {
            assert_eq!(built.is_applicable(result), kind.produces(result), "{}", kind);
        }
    }
}
