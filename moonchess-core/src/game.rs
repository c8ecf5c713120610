//! Game state and placement rules
//!
//! Two aging rules run on every placement, in a fixed order:
//! per-player cap first (a 4th piece evicts that player's oldest),
//! then the global cap (a 6th live piece evicts the oldest piece of
//! either player).

use crate::board::{Board, Cell, Player};
use crate::eval;
use crate::history::PlacementLog;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Maximum live pieces per player
pub const PER_PLAYER_CAP: usize = 3;

/// Maximum live pieces on the whole board
pub const GLOBAL_CAP: usize = 5;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Terminal state of a game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Won(Player),
    Draw,
}

/// Placement rejected without touching state
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("game is already over")]
    GameOver,
    #[error("cell {cell} is not open to {player}")]
    OccupiedCell { player: Player, cell: Cell },
}

// ============================================================================
// POSITION
// ============================================================================

/// Board plus the placement histories that drive eviction
///
/// Kept separate from turn bookkeeping so bot simulation can clone
/// and advance it without touching the live game.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct Position {
    board: Board,
    x_order: PlacementLog<Cell>,
    o_order: PlacementLog<Cell>,
    global_order: PlacementLog<(Player, Cell)>,
}

impl Position {
    fn new() -> Self {
        Self {
            board: Board::new(),
            x_order: PlacementLog::new(),
            o_order: PlacementLog::new(),
            global_order: PlacementLog::new(),
        }
    }

    fn order(&self, player: Player) -> &PlacementLog<Cell> {
        match player {
            Player::X => &self.x_order,
            Player::O => &self.o_order,
        }
    }

    fn order_mut(&mut self, player: Player) -> &mut PlacementLog<Cell> {
        match player {
            Player::X => &mut self.x_order,
            Player::O => &mut self.o_order,
        }
    }

    /// Cells the player may overwrite on their next placement: their
    /// own oldest piece, only while they hold a full set of 3. The
    /// global-oldest piece is never overwritable on its own account.
    fn removable_cells(&self, player: Player) -> FxHashSet<Cell> {
        let mut removable = FxHashSet::default();
        let order = self.order(player);
        if order.len() == PER_PLAYER_CAP {
            if let Some(&oldest) = order.front() {
                removable.insert(oldest);
            }
        }
        removable
    }

    /// Remove whatever piece sits at `cell` from the board and both
    /// histories
    fn remove_piece_at(&mut self, cell: Cell) {
        let Some(owner) = self.board.get(cell) else {
            return;
        };
        self.board.clear(cell);
        self.order_mut(owner).remove(&cell);
        self.global_order.remove(&(owner, cell));
    }

    /// Write the mark and run both eviction rules, per-player first
    ///
    /// The caller has already checked the cell is vacant or removable
    /// for `player`.
    fn apply_placement(&mut self, player: Player, cell: Cell) {
        // Overwriting is only ever the player's own removable oldest
        if !self.board.is_vacant(cell) {
            self.remove_piece_at(cell);
        }

        self.board.set(cell, player);
        self.order_mut(player).push(cell);
        self.global_order.push((player, cell));

        // Per-player cap: a 4th piece bumps the player's oldest
        if self.order(player).len() > PER_PLAYER_CAP {
            if let Some(oldest) = self.order_mut(player).pop_front() {
                if self.board.get(oldest) == Some(player) {
                    self.board.clear(oldest);
                }
                self.global_order.remove(&(player, oldest));
            }
        }

        // Global cap: a 6th live piece bumps the oldest overall.
        // Runs after the per-player rule, on the resulting board.
        while self.board.live_count() > GLOBAL_CAP && !self.global_order.is_empty() {
            if let Some((owner, oldest)) = self.global_order.pop_front() {
                if self.board.get(oldest) == Some(owner) {
                    self.board.clear(oldest);
                    self.order_mut(owner).remove(&oldest);
                }
            }
        }
    }

    /// Fail fast on any history/board disagreement; these are logic
    /// defects with no recovery path.
    fn assert_invariants(&self) {
        assert!(self.x_order.len() <= PER_PLAYER_CAP, "X holds too many pieces");
        assert!(self.o_order.len() <= PER_PLAYER_CAP, "O holds too many pieces");
        assert!(self.global_order.len() <= GLOBAL_CAP, "board over the global cap");
        assert_eq!(
            self.global_order.len(),
            self.board.live_count(),
            "global history out of sync with board"
        );

        let mut seen: FxHashSet<Cell> = FxHashSet::default();
        for (player, order) in [(Player::X, &self.x_order), (Player::O, &self.o_order)] {
            for &cell in order.iter() {
                assert!(seen.insert(cell), "cell {cell} recorded twice");
                assert_eq!(
                    self.board.get(cell),
                    Some(player),
                    "history entry {cell} does not match the board"
                );
            }
        }
        for &(player, cell) in self.global_order.iter() {
            assert_eq!(
                self.board.get(cell),
                Some(player),
                "global entry {cell} does not match the board"
            );
            assert!(self.order(player).contains(&cell), "global entry {cell} missing from {player}'s history");
        }
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Full state of one game (clone to simulate)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    position: Position,
    current_player: Player,
    outcome: Outcome,
}

impl GameState {
    /// Fresh game with an empty board
    pub fn new(starting_player: Player) -> Self {
        Self {
            position: Position::new(),
            current_player: starting_player,
            outcome: Outcome::Ongoing,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    /// Side to move (rendering cue; `place` takes the mover explicitly)
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Ongoing
    }

    /// Live pieces a player holds
    pub fn piece_count(&self, player: Player) -> usize {
        self.position.order(player).len()
    }

    // ========================================================================
    // LEGALITY
    // ========================================================================

    /// Occupied cells the player may legally overwrite
    pub fn removable_cells(&self, player: Player) -> FxHashSet<Cell> {
        self.position.removable_cells(player)
    }

    /// A placement is legal on a vacant cell or on the player's own
    /// removable oldest piece. Pure query, never mutates.
    pub fn is_legal_placement(&self, player: Player, cell: Cell) -> bool {
        self.position.board.is_vacant(cell)
            || self.position.removable_cells(player).contains(&cell)
    }

    /// The piece the global cap would evict next, shown only while
    /// the board is at the cap. Highlight cue, not a legality input.
    pub fn global_oldest(&self) -> Option<Cell> {
        if self.position.board.live_count() < GLOBAL_CAP {
            return None;
        }
        self.position
            .global_order
            .front()
            .map(|&(_, cell)| cell)
    }

    // ========================================================================
    // PLACEMENT
    // ========================================================================

    /// Place a piece for `player` at `cell`
    ///
    /// Refuses (without state change) placements after the game ended
    /// or on cells the player may not take. On success the outcome is
    /// re-evaluated and, if the game continues, the turn passes to the
    /// opponent. Turn order itself is not enforced here; the caller
    /// sequences turns.
    pub fn place(&mut self, player: Player, cell: Cell) -> Result<(), RuleError> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        if !self.is_legal_placement(player, cell) {
            return Err(RuleError::OccupiedCell { player, cell });
        }

        self.position.apply_placement(player, cell);
        self.position.assert_invariants();

        if let Some(mark) = eval::winner(&self.position.board) {
            self.outcome = Outcome::Won(mark);
        } else if eval::is_draw(&self.position.board) {
            self.outcome = Outcome::Draw;
        } else {
            self.current_player = player.opponent();
        }

        Ok(())
    }

    /// Board left behind if `player` placed at `cell`, without
    /// touching this state
    ///
    /// Runs the full placement semantics (overwrite, per-player cap,
    /// global cap) on a disposable copy. An illegal placement
    /// projects the board unchanged.
    pub fn project_placement(&self, player: Player, cell: Cell) -> Board {
        let mut position = self.position.clone();
        if !position.board.is_vacant(cell) && !position.removable_cells(player).contains(&cell) {
            return position.board;
        }
        position.apply_placement(player, cell);
        position.board
    }
}

// ============================================================================
// TESTS
// ============================================================================
