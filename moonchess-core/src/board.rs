//! 3x3 board, cells and marks

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// A board position, indexed 0-8 row-major
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell(u8);

impl Cell {
    /// Create a cell from a row-major index, `None` if out of range
    pub fn new(index: u8) -> Option<Self> {
        (index < CELL_COUNT as u8).then_some(Self(index))
    }

    /// Cell at (row, col), `None` if out of range
    pub fn at(row: u8, col: u8) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self(row * 3 + col))
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    pub const fn col(self) -> u8 {
        self.0 % 3
    }

    /// Iterate all cells in index order
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Board contents: a mark or empty per cell
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; CELL_COUNT],
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark at a cell
    pub fn get(&self, cell: Cell) -> Option<Player> {
        self.cells[cell.index()]
    }

    pub fn is_vacant(&self, cell: Cell) -> bool {
        self.cells[cell.index()].is_none()
    }

    pub(crate) fn set(&mut self, cell: Cell, player: Player) {
        self.cells[cell.index()] = Some(player);
    }

    pub(crate) fn clear(&mut self, cell: Cell) {
        self.cells[cell.index()] = None;
    }

    /// Number of live pieces across both players
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|m| m.is_some()).count()
    }

    /// Iterate occupied cells with their marks
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Player)> + '_ {
        Cell::all().filter_map(|c| self.get(c).map(|p| (c, p)))
    }
}
