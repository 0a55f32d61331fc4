use super::board::Board;
use super::types::{Cell, Player, Position, WinningLine};

const fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Every three-in-a-row on a 3x3 board: rows, then columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

pub fn find_winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    let mark = Cell::MarkedBy(player);
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&pos| board.cell(pos) == mark))
        .map(|line| WinningLine::new(player, line[0], line[2]))
}
