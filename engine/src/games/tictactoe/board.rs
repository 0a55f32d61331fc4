use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::error::GameError;
use super::types::{Cell, Player, Position, WinningLine};
use super::win_detector::find_winning_line;

pub const BOARD_SIZE: usize = 3;

/// The 3x3 grid. Whose turn it is lives with the caller, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from digit rows: 0 is empty, 1 is Human, 2 is Computer.
    pub fn from_rows(rows: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, GameError> {
        let mut board = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.cells[row][col] = match value {
                    0 => Cell::Empty,
                    1 => Cell::MarkedBy(Player::Human),
                    2 => Cell::MarkedBy(Player::Computer),
                    other => return Err(GameError::InvalidCellValue(other)),
                };
            }
        }
        Ok(board)
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..BOARD_SIZE`.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Marks an empty cell. Occupied or out-of-range cells are rejected and
    /// the board is left untouched.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), GameError> {
        let pos = Position::new(row, col);
        if !pos.is_valid() {
            return Err(GameError::OutOfBounds { row, col });
        }
        if !self.is_empty(row, col) {
            return Err(GameError::CellOccupied(pos));
        }
        self.cells[row][col] = Cell::MarkedBy(player);
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..BOARD_SIZE`.
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    pub fn has_won(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    pub fn winning_line(&self, player: Player) -> Option<WinningLine> {
        find_winning_line(self, player)
    }

    pub fn reset(&mut self) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                self.clear(row, col);
            }
        }
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Cell::Empty)
                .map(move |(col, _)| Position::new(row, col))
        })
    }

    pub fn mark_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::MarkedBy(player))
            .count()
    }

    /// Marks `pos` for the lifetime of the returned guard. The cell is
    /// cleared again when the guard drops, on every return path.
    pub(crate) fn speculate(&mut self, pos: Position, player: Player) -> SpeculativeMove<'_> {
        debug_assert!(self.cell(pos) == Cell::Empty, "speculating on marked cell {:?}", pos);
        self.cells[pos.row][pos.col] = Cell::MarkedBy(player);
        SpeculativeMove {
            board: self,
            position: pos,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::MarkedBy(Player::Human) => 'O',
                    Cell::MarkedBy(Player::Computer) => 'X',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

pub(crate) struct SpeculativeMove<'a> {
    board: &'a mut Board,
    position: Position,
}

impl Deref for SpeculativeMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for SpeculativeMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for SpeculativeMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position.row, self.position.col);
    }
}
