mod board;
mod game_state;
pub mod move_selector;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use game_state::TicTacToeGame;
pub use move_selector::{SearchOutcome, find_best_move, select_and_apply_best_move};
pub use types::{Cell, FirstPlayerMode, GameStatus, Player, Position, WinningLine};
pub use win_detector::{WINNING_LINES, find_winning_line};
