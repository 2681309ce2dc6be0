//! Game fixtures shared by the integration tests
#![allow(dead_code)]

use gamesearch::{Action, Capabilities, GameState, NoPlayer};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Towers of Hanoi
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HanoiMove {
    pub from: usize,
    pub to: usize,
}

impl Action for HanoiMove {}

/// Disks are numbered 1 (smallest) to n; each peg lists its disks bottom to top.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hanoi {
    pub pegs: [Vec<u8>; 3],
    pub disks: u8,
}

impl Hanoi {
    pub fn new(disks: u8) -> Self {
        Hanoi {
            pegs: [(1..=disks).rev().collect(), Vec::new(), Vec::new()],
            disks,
        }
    }
}

impl GameState for Hanoi {
    type Action = HanoiMove;
    type Player = NoPlayer;

    fn get_legal_actions(&self) -> Vec<HanoiMove> {
        let mut moves = Vec::new();
        for from in 0..3 {
            let Some(&disk) = self.pegs[from].last() else {
                continue;
            };
            for to in 0..3 {
                if to == from {
                    continue;
                }
                if self.pegs[to].last().map_or(true, |&top| top > disk) {
                    moves.push(HanoiMove { from, to });
                }
            }
        }
        moves
    }

    fn apply_action(&self, action: &HanoiMove) -> Self {
        let mut next = self.clone();
        if let Some(disk) = next.pegs[action.from].pop() {
            next.pegs[action.to].push(disk);
        }
        next
    }

    fn is_terminal(&self) -> bool {
        self.pegs[2].len() == self.disks as usize
    }

    fn get_current_player(&self) -> NoPlayer {
        NoPlayer
    }

    /// Disks not yet on the target peg; lower is better
    fn heuristic(&self) -> Option<f64> {
        Some((self.disks as usize - self.pegs[2].len()) as f64)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::transitions_only().with_heuristic()
    }
}

// ---------------------------------------------------------------------------
// Tic-tac-toe
// ---------------------------------------------------------------------------

pub const WIN: f64 = 100.0;

/// 0 = empty, 1 = X, 2 = O; X moves first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    pub board: [u8; 9],
    pub to_move: u8,
}

impl TicTacToe {
    pub fn new() -> Self {
        TicTacToe {
            board: [0; 9],
            to_move: 1,
        }
    }

    /// Builds a position from a 9-character string of `X`, `O` and `.`
    pub fn from_layout(layout: &str, to_move: u8) -> Self {
        let mut board = [0; 9];
        for (cell, c) in board.iter_mut().zip(layout.chars()) {
            *cell = match c {
                'X' => 1,
                'O' => 2,
                _ => 0,
            };
        }
        TicTacToe { board, to_move }
    }

    pub fn winner(&self) -> Option<u8> {
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
        LINES.iter().find_map(|line| {
            let first = self.board[line[0]];
            (first != 0 && line.iter().all(|&i| self.board[i] == first)).then_some(first)
        })
    }
}

impl GameState for TicTacToe {
    type Action = usize;
    type Player = u8;

    fn get_legal_actions(&self) -> Vec<usize> {
        if self.winner().is_some() {
            return vec![];
        }
        (0..9).filter(|&i| self.board[i] == 0).collect()
    }

    fn apply_action(&self, cell: &usize) -> Self {
        let mut next = self.clone();
        next.board[*cell] = self.to_move;
        next.to_move = 3 - self.to_move;
        next
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.board.iter().all(|&c| c != 0)
    }

    fn get_current_player(&self) -> u8 {
        self.to_move
    }

    fn utility(&self, for_player: &u8) -> Option<f64> {
        Some(match self.winner() {
            Some(w) if w == *for_player => WIN,
            Some(_) => -WIN,
            None => 0.0,
        })
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::transitions_only().with_utility()
    }
}

// ---------------------------------------------------------------------------
// Connect-three on a 4x3 gravity board
// ---------------------------------------------------------------------------

pub const C3_COLS: usize = 4;
pub const C3_ROWS: usize = 3;

/// `columns[c]` lists the discs in column `c` bottom to top (1 or 2).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConnectThree {
    pub columns: [Vec<u8>; C3_COLS],
    pub to_move: u8,
}

impl ConnectThree {
    pub fn new() -> Self {
        ConnectThree {
            columns: Default::default(),
            to_move: 1,
        }
    }

    pub fn play(&self, moves: &[usize]) -> Self {
        moves.iter().fold(self.clone(), |s, m| s.apply_action(m))
    }

    fn cell(&self, col: isize, row: isize) -> u8 {
        if col < 0 || row < 0 || col >= C3_COLS as isize || row >= C3_ROWS as isize {
            return 0;
        }
        self.columns[col as usize]
            .get(row as usize)
            .copied()
            .unwrap_or(0)
    }

    pub fn winner(&self) -> Option<u8> {
        const DIRS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];
        for col in 0..C3_COLS as isize {
            for row in 0..C3_ROWS as isize {
                let disc = self.cell(col, row);
                if disc == 0 {
                    continue;
                }
                for (dc, dr) in DIRS {
                    if (1..3).all(|k| self.cell(col + dc * k, row + dr * k) == disc) {
                        return Some(disc);
                    }
                }
            }
        }
        None
    }
}

impl GameState for ConnectThree {
    type Action = usize;
    type Player = u8;

    fn get_legal_actions(&self) -> Vec<usize> {
        if self.winner().is_some() {
            return vec![];
        }
        (0..C3_COLS)
            .filter(|&c| self.columns[c].len() < C3_ROWS)
            .collect()
    }

    fn apply_action(&self, col: &usize) -> Self {
        let mut next = self.clone();
        next.columns[*col].push(self.to_move);
        next.to_move = 3 - self.to_move;
        next
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.columns.iter().all(|c| c.len() == C3_ROWS)
    }

    fn get_current_player(&self) -> u8 {
        self.to_move
    }

    /// Wins score ±100; otherwise centre discs count double
    fn utility(&self, for_player: &u8) -> Option<f64> {
        if let Some(w) = self.winner() {
            return Some(if w == *for_player { WIN } else { -WIN });
        }
        let mut score = 0.0;
        for (c, column) in self.columns.iter().enumerate() {
            let weight = if c == 1 || c == 2 { 2.0 } else { 1.0 };
            for &disc in column {
                score += if disc == *for_player { weight } else { -weight };
            }
        }
        Some(score)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::transitions_only().with_utility()
    }
}

// ---------------------------------------------------------------------------
// A cycle of states with no terminal
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ring {
    pub position: u8,
    pub size: u8,
    pub goal: Option<u8>,
}

impl GameState for Ring {
    type Action = u8;
    type Player = NoPlayer;

    fn get_legal_actions(&self) -> Vec<u8> {
        vec![1, self.size - 1]
    }

    fn apply_action(&self, step: &u8) -> Self {
        Ring {
            position: (self.position + step) % self.size,
            ..self.clone()
        }
    }

    fn is_terminal(&self) -> bool {
        self.goal == Some(self.position)
    }

    fn get_current_player(&self) -> NoPlayer {
        NoPlayer
    }
}

// ---------------------------------------------------------------------------
// Uniform synthetic tree
// ---------------------------------------------------------------------------

/// Every state is identified by the branch indices leading to it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Synthetic {
    pub path: Vec<u8>,
    pub branching: u8,
    pub max_depth: usize,
    pub goal: Option<Vec<u8>>,
}

impl Synthetic {
    pub fn new(branching: u8, max_depth: usize) -> Self {
        Synthetic {
            path: Vec::new(),
            branching,
            max_depth,
            goal: None,
        }
    }

    pub fn with_goal(mut self, goal: Vec<u8>) -> Self {
        self.goal = Some(goal);
        self
    }
}

impl GameState for Synthetic {
    type Action = u8;
    type Player = NoPlayer;

    fn get_legal_actions(&self) -> Vec<u8> {
        if self.path.len() >= self.max_depth {
            return vec![];
        }
        (0..self.branching).collect()
    }

    fn apply_action(&self, branch: &u8) -> Self {
        let mut next = self.clone();
        next.path.push(*branch);
        next
    }

    fn is_terminal(&self) -> bool {
        self.goal.as_ref() == Some(&self.path)
    }

    fn get_current_player(&self) -> NoPlayer {
        NoPlayer
    }
}

// ---------------------------------------------------------------------------
// Comparator fixtures
// ---------------------------------------------------------------------------

/// A state whose heuristic and utility are fixed numbers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scored {
    pub tag: u32,
    pub heuristic: Option<i64>,
    pub utility: Option<i64>,
}

impl Scored {
    pub fn new(tag: u32, heuristic: Option<i64>, utility: Option<i64>) -> Self {
        Scored {
            tag,
            heuristic,
            utility,
        }
    }
}

impl GameState for Scored {
    type Action = u8;
    type Player = NoPlayer;

    fn get_legal_actions(&self) -> Vec<u8> {
        vec![]
    }

    fn apply_action(&self, _action: &u8) -> Self {
        self.clone()
    }

    fn is_terminal(&self) -> bool {
        true
    }

    fn get_current_player(&self) -> NoPlayer {
        NoPlayer
    }

    fn heuristic(&self) -> Option<f64> {
        self.heuristic.map(|h| h as f64)
    }

    fn utility(&self, _for_player: &NoPlayer) -> Option<f64> {
        self.utility.map(|u| u as f64)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::transitions_only().with_heuristic().with_utility()
    }
}
