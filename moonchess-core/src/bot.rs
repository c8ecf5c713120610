//! Bot opponents
//!
//! Two tiers: a random-legal player and a one-ply win/block searcher.
//! The searcher projects each candidate through the full placement
//! semantics, so it never chases a line its own eviction would break.

use crate::board::{Cell, Player};
use crate::eval;
use crate::game::GameState;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bot strength tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform choice among legal cells
    Easy,
    /// Win if possible, block if necessary, otherwise random
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}' (expected easy or hard)")),
        }
    }
}

/// Bot player with an owned, seedable random source
pub struct Bot {
    pub difficulty: Difficulty,
    rng: ChaCha8Rng,
}

impl Bot {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_seed(difficulty, 42)
    }

    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick a cell for `player`, `None` only when no cell is open
    pub fn choose_move(&mut self, state: &GameState, player: Player) -> Option<Cell> {
        match self.difficulty {
            Difficulty::Easy => self.choose_random(state, player),
            Difficulty::Hard => self.choose_heuristic(state, player),
        }
    }

    fn choose_random(&mut self, state: &GameState, player: Player) -> Option<Cell> {
        let candidates = candidate_moves(state, player);
        candidates.choose(&mut self.rng).copied()
    }

    fn choose_heuristic(&mut self, state: &GameState, player: Player) -> Option<Cell> {
        let candidates = candidate_moves(state, player);

        // Win now
        for &cell in &candidates {
            let projected = state.project_placement(player, cell);
            if eval::winner(&projected) == Some(player) {
                return Some(cell);
            }
        }

        // Block the opponent's win
        let opponent = player.opponent();
        for &cell in &candidates {
            let projected = state.project_placement(opponent, cell);
            if eval::winner(&projected) == Some(opponent) {
                return Some(cell);
            }
        }

        // Fallback
        candidates.choose(&mut self.rng).copied()
    }
}

/// Cells open to `player`: vacant ones plus their removable oldest,
/// in increasing index order
pub fn candidate_moves(state: &GameState, player: Player) -> Vec<Cell> {
    let removable = state.removable_cells(player);
    Cell::all()
        .filter(|c| state.board().is_vacant(*c) || removable.contains(c))
        .collect()
}
