//! Exhaustive minimax for the computer player.
//!
//! Scores are from the computer's point of view and carry no depth discount:
//! a win in one move and a win in five both score [`WIN_SCORE`]. There is no
//! pruning, the 3x3 tree is small enough to walk completely.

use crate::log_debug;
use super::board::{BOARD_SIZE, Board};
use super::types::{Player, Position};

pub const WIN_SCORE: i32 = 1;
pub const LOSS_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub position: Position,
    pub score: i32,
    pub nodes_visited: u64,
}

/// Score of a finished position, checked as computer win, human win, then draw.
pub fn terminal_score(board: &Board) -> Option<i32> {
    if board.has_won(Player::Computer) {
        Some(WIN_SCORE)
    } else if board.has_won(Player::Human) {
        Some(LOSS_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Minimax value of `board` with `side_to_move` about to play. The computer
/// maximizes, the human minimizes. The board is unchanged on return.
pub fn evaluate(board: &mut Board, side_to_move: Player) -> i32 {
    let mut nodes_visited = 0;
    minimax(board, side_to_move, &mut nodes_visited)
}

/// Picks the computer's move without applying it. Ties keep the earliest
/// cell in row-major order. `None` when the board has no empty cell.
pub fn search(board: &mut Board) -> Option<SearchOutcome> {
    let mut nodes_visited = 0;
    let mut best: Option<(Position, i32)> = None;

    for pos in candidate_moves(board) {
        let score = {
            let mut speculative = board.speculate(pos, Player::Computer);
            minimax(&mut speculative, Player::Human, &mut nodes_visited)
        };

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    best.map(|(position, score)| SearchOutcome {
        position,
        score,
        nodes_visited,
    })
}

pub fn find_best_move(board: &mut Board) -> Option<Position> {
    search(board).map(|outcome| outcome.position)
}

/// Searches and marks the chosen cell for the computer.
pub fn play_best_move(board: &mut Board) -> Option<Position> {
    let Some(outcome) = search(board) else {
        log_debug!("No empty cell left, computer move skipped");
        return None;
    };

    log_debug!(
        "Computer plays ({}, {}) with score {} after {} positions",
        outcome.position.row,
        outcome.position.col,
        outcome.score,
        outcome.nodes_visited
    );

    board
        .place(outcome.position.row, outcome.position.col, Player::Computer)
        .ok()
        .map(|_| outcome.position)
}

/// Returns `false` and leaves the board alone when it is already full.
pub fn select_and_apply_best_move(board: &mut Board) -> bool {
    play_best_move(board).is_some()
}

fn minimax(board: &mut Board, side_to_move: Player, nodes_visited: &mut u64) -> i32 {
    *nodes_visited += 1;

    if let Some(score) = terminal_score(board) {
        return score;
    }

    let mut best: Option<i32> = None;
    for pos in candidate_moves(board) {
        let score = {
            let mut speculative = board.speculate(pos, side_to_move);
            minimax(&mut speculative, side_to_move.opponent(), nodes_visited)
        };

        best = Some(match (best, side_to_move) {
            (None, _) => score,
            (Some(current), Player::Computer) => current.max(score),
            (Some(current), Player::Human) => current.min(score),
        });
    }

    best.unwrap_or(DRAW_SCORE)
}

/// Snapshot of the empty cells, row-major. Each branch restores the board
/// before the next one starts, so the snapshot stays accurate.
fn candidate_moves(board: &Board) -> impl Iterator<Item = Position> + use<> {
    let mut moves = [Position::new(0, 0); BOARD_SIZE * BOARD_SIZE];
    let mut count = 0;
    for pos in board.empty_cells() {
        moves[count] = pos;
        count += 1;
    }
    moves.into_iter().take(count)
}
