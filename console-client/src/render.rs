use tictactoe_engine::games::tictactoe::{
    BOARD_SIZE, Board, Cell, GameStatus, Player, Position, TicTacToeGame,
};

use crate::config::MarksConfig;

pub fn render_board(board: &Board, marks: &MarksConfig) -> String {
    let mut output = String::from(" ");
    for col in 0..BOARD_SIZE {
        output.push_str(&format!(" {}", col + 1));
    }
    output.push('\n');

    for row in 0..BOARD_SIZE {
        output.push_str(&(row + 1).to_string());
        for col in 0..BOARD_SIZE {
            let symbol = match board.cell(Position::new(row, col)) {
                Cell::Empty => marks.empty,
                Cell::MarkedBy(Player::Human) => marks.human,
                Cell::MarkedBy(Player::Computer) => marks.computer,
            };
            output.push(' ');
            output.push(symbol);
        }
        output.push('\n');
    }

    output
}

pub fn describe_status(game: &TicTacToeGame) -> String {
    let line = game
        .winning_line()
        .map(|line| {
            format!(
                " ({},{}) to ({},{})",
                line.start.row + 1,
                line.start.col + 1,
                line.end.row + 1,
                line.end.col + 1
            )
        })
        .unwrap_or_default();

    match game.status() {
        GameStatus::InProgress => "Your move".to_string(),
        GameStatus::HumanWon => format!("You win{}. Press 'r' to play again", line),
        GameStatus::ComputerWon => format!("Computer wins{}. Press 'r' to play again", line),
        GameStatus::Draw => "Draw. Press 'r' to play again".to_string(),
    }
}

pub fn help_text() -> &'static str {
    "Moves: '<row> <col>' (1-3) or a cell number 1-9 counted row by row.\n\
     Commands: 'r' restart, 'h' help, 'q' quit."
}
