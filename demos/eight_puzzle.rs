//! Sliding-tile puzzle example
//!
//! Solves a scrambled 8-puzzle with breadth-first search and with A* over
//! the Manhattan distance, then prints both benchmarks.

use std::fmt;

use gamesearch::{
    Action, Capabilities, GameState, HeuristicOrder, NoPlayer, SearchAlgorithm, SearchConfig,
    SingleAgentSearch,
};

/// Direction the blank moves in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slide {
    Up,
    Down,
    Left,
    Right,
}

impl Action for Slide {}

/// Tiles in row-major order, 0 is the blank
#[derive(Clone, PartialEq, Eq, Hash)]
struct Puzzle {
    tiles: [u8; 9],
}

impl Puzzle {
    const GOAL: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

    fn blank(&self) -> usize {
        self.tiles.iter().position(|&t| t == 0).unwrap_or(8)
    }
}

impl GameState for Puzzle {
    type Action = Slide;
    type Player = NoPlayer;

    fn get_legal_actions(&self) -> Vec<Slide> {
        let blank = self.blank();
        let (row, col) = (blank / 3, blank % 3);
        let mut moves = Vec::with_capacity(4);
        if row > 0 {
            moves.push(Slide::Up);
        }
        if row < 2 {
            moves.push(Slide::Down);
        }
        if col > 0 {
            moves.push(Slide::Left);
        }
        if col < 2 {
            moves.push(Slide::Right);
        }
        moves
    }

    fn apply_action(&self, slide: &Slide) -> Self {
        let blank = self.blank();
        let target = match slide {
            Slide::Up => blank - 3,
            Slide::Down => blank + 3,
            Slide::Left => blank - 1,
            Slide::Right => blank + 1,
        };
        let mut next = self.clone();
        next.tiles.swap(blank, target);
        next
    }

    fn is_terminal(&self) -> bool {
        self.tiles == Self::GOAL
    }

    fn get_current_player(&self) -> NoPlayer {
        NoPlayer
    }

    /// Sum of Manhattan distances of every tile to its goal cell
    fn heuristic(&self) -> Option<f64> {
        let distance: usize = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != 0)
            .map(|(i, &t)| {
                let goal = (t - 1) as usize;
                (i / 3).abs_diff(goal / 3) + (i % 3).abs_diff(goal % 3)
            })
            .sum();
        Some(distance as f64)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::transitions_only().with_heuristic()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(3) {
            for &tile in row {
                if tile == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{} ", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn report(name: &str, algorithm: &mut dyn SearchAlgorithm<Puzzle>) {
    match algorithm.moves() {
        Some(moves) => println!("{}: {} moves {:?}", name, moves.len(), moves),
        None => println!("{}: no solution", name),
    }
    println!("{}\n", algorithm.get_benchmark().summary());
}

fn main() {
    env_logger::init();

    let start = Puzzle {
        tiles: [8, 6, 7, 2, 5, 4, 3, 0, 1],
    };
    println!("Start position:\n{}", start);

    let mut bfs = SingleAgentSearch::breadth_first(start.clone(), SearchConfig::default());
    report("breadth-first", &mut bfs);

    let config = SearchConfig::default().with_heuristic_order(HeuristicOrder::LowerIsBetter);
    let mut astar = SingleAgentSearch::a_star_tree(start, config);
    report("a-star (tree)", &mut astar);
}
