use crate::games::tictactoe::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    OutOfBounds { row: usize, col: usize },
    CellOccupied(Position),
    NotYourTurn,
    GameOver,
    InvalidCellValue(u8),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            GameError::CellOccupied(pos) => {
                write!(f, "Cell ({}, {}) is already marked", pos.row, pos.col)
            }
            GameError::NotYourTurn => write!(f, "Not your turn"),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::InvalidCellValue(value) => {
                write!(f, "Invalid cell value {}, expected 0, 1 or 2", value)
            }
        }
    }
}

impl std::error::Error for GameError {}
