//! Moon Chess Core - rule engine and bots
//!
//! Tic-tac-toe with piece aging: each player keeps at most 3 live
//! pieces and the board at most 5, with the oldest piece evicted when
//! a cap is crossed. This crate provides:
//! - Board, cells and marks
//! - Game state with per-player and global placement histories
//! - Placement legality and the two eviction rules
//! - Win/draw detection
//! - Two bot tiers (random-legal and win/block search)
//!
//! Turn pacing, highlight flashing and rendering belong to the
//! front end; it reads legality and highlight cues back from here.

pub mod board;
pub mod bot;
pub mod eval;
pub mod game;
pub mod history;

// Re-exports for convenient access
pub use board::{Board, Cell, Player, CELL_COUNT};
pub use bot::{candidate_moves, Bot, Difficulty};
pub use eval::{is_draw, winner, WIN_LINES};
pub use game::{GameState, Outcome, RuleError, GLOBAL_CAP, PER_PLAYER_CAP};
pub use history::PlacementLog;
