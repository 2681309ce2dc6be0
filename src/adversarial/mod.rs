//! Adversarial search for two-player and multi-agent games
//!
//! - [`AlphaBeta`]: fixed-depth fail-soft alpha-beta with a transposition table
//! - [`Mtdf`]: iterative-deepening MTD(f) built on null-window alpha-beta
//! - [`TranspositionTable`]: the depth-indexed value cache both share

pub mod alpha_beta;
pub mod mtdf;
pub mod transposition;

pub use alpha_beta::{AlphaBeta, WindowResult};
pub use mtdf::Mtdf;
pub use transposition::{Bound, TranspositionEntry, TranspositionTable};
