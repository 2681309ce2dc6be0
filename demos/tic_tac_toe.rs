//! Self-play Tic-Tac-Toe
//!
//! MTD(f) plays X against plain alpha-beta playing O. Both search the full
//! game, so the result should always be a draw.

use std::fmt;
use std::time::Duration;

use gamesearch::{
    AlphaBeta, Capabilities, GameState, Mtdf, SearchAlgorithm, SearchConfig,
};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Mark {
    X,
    O,
}

impl gamesearch::Player for Mark {}

impl Mark {
    fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct Board {
    cells: [Option<Mark>; 9],
    turn: Mark,
}

impl Board {
    fn empty() -> Self {
        Board {
            cells: [None; 9],
            turn: Mark::X,
        }
    }

    fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a]?;
            (self.cells[b] == Some(mark) && self.cells[c] == Some(mark)).then_some(mark)
        })
    }
}

impl GameState for Board {
    type Action = usize;
    type Player = Mark;

    fn get_legal_actions(&self) -> Vec<usize> {
        if self.winner().is_some() {
            return Vec::new();
        }
        (0..9).filter(|&cell| self.cells[cell].is_none()).collect()
    }

    fn apply_action(&self, cell: &usize) -> Self {
        let mut next = self.clone();
        next.cells[*cell] = Some(self.turn);
        next.turn = self.turn.other();
        next
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.cells.iter().all(Option::is_some)
    }

    fn get_current_player(&self) -> Mark {
        self.turn
    }

    fn utility(&self, for_player: &Mark) -> Option<f64> {
        Some(match self.winner() {
            Some(mark) if mark == *for_player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        })
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::transitions_only().with_utility()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                    None => ".",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

fn choose(board: &Board, config: &SearchConfig) -> gamesearch::Result<Option<usize>> {
    let mut searcher: Box<dyn SearchAlgorithm<Board>> = match board.turn {
        Mark::X => Box::new(Mtdf::new(board.clone(), config.clone())?),
        Mark::O => Box::new(AlphaBeta::new(board.clone(), config.clone())?),
    };
    let _timer = searcher
        .cancellation_token()
        .cancel_after(Duration::from_secs(1));

    let best = searcher.best_move();
    log::info!(
        "{} picked {:?} after {} nodes",
        searcher.name(),
        best,
        searcher.get_benchmark().processed_nodes
    );
    Ok(best)
}

fn main() -> gamesearch::Result<()> {
    env_logger::init();

    let config = SearchConfig::default().with_depth_limit(9);
    let mut board = Board::empty();

    while !board.is_terminal() {
        let Some(cell) = choose(&board, &config)? else {
            break;
        };
        println!("{:?} plays {}", board.turn, cell);
        board = board.apply_action(&cell);
        println!("{}", board);
    }

    match board.winner() {
        Some(mark) => println!("{:?} wins", mark),
        None => println!("Draw"),
    }
    Ok(())
}
