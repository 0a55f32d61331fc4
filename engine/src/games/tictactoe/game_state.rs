use crate::error::GameError;
use crate::games::SessionRng;
use crate::log_debug;
use super::board::Board;
use super::move_selector::play_best_move;
use super::types::{FirstPlayerMode, GameStatus, Player, Position, WinningLine};

/// One human-versus-computer game. Owns the board and the turn; the computer
/// answers every human move immediately.
#[derive(Debug)]
pub struct TicTacToeGame {
    board: Board,
    first_player_mode: FirstPlayerMode,
    first_player: Player,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Position>,
    moves_played: usize,
}

impl TicTacToeGame {
    pub fn new(first_player_mode: FirstPlayerMode, rng: &mut SessionRng) -> Self {
        let first_player = resolve_first_player(first_player_mode, rng);
        let mut game = Self {
            board: Board::new(),
            first_player_mode,
            first_player,
            current_player: first_player,
            status: GameStatus::InProgress,
            last_move: None,
            moves_played: 0,
        };

        if game.current_player == Player::Computer {
            game.play_computer_move();
        }

        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status
            .winner()
            .and_then(|winner| self.board.winning_line(winner))
    }

    /// Applies the human's move and, if the game goes on, the computer's reply.
    pub fn play_human_move(&mut self, pos: Position) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        if self.current_player != Player::Human {
            return Err(GameError::NotYourTurn);
        }

        self.board.place(pos.row, pos.col, Player::Human)?;
        self.record_move(Player::Human, pos);

        if self.status == GameStatus::InProgress {
            self.play_computer_move();
        }

        Ok(self.status)
    }

    pub fn restart(&mut self, rng: &mut SessionRng) {
        self.board.reset();
        self.first_player = resolve_first_player(self.first_player_mode, rng);
        self.current_player = self.first_player;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.moves_played = 0;

        log_debug!("Game restarted, {:?} moves first", self.first_player);

        if self.current_player == Player::Computer {
            self.play_computer_move();
        }
    }

    fn play_computer_move(&mut self) {
        if let Some(pos) = play_best_move(&mut self.board) {
            self.record_move(Player::Computer, pos);
        }
    }

    fn record_move(&mut self, player: Player, pos: Position) {
        self.last_move = Some(pos);
        self.moves_played += 1;
        self.check_game_over(player);

        if self.status == GameStatus::InProgress {
            self.current_player = player.opponent();
        }
    }

    fn check_game_over(&mut self, last_mover: Player) {
        if self.board.has_won(last_mover) {
            self.status = match last_mover {
                Player::Human => GameStatus::HumanWon,
                Player::Computer => GameStatus::ComputerWon,
            };
            log_debug!("{:?} won after {} moves", last_mover, self.moves_played);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            log_debug!("Draw after {} moves", self.moves_played);
        }
    }
}

fn resolve_first_player(mode: FirstPlayerMode, rng: &mut SessionRng) -> Player {
    match mode {
        FirstPlayerMode::Human => Player::Human,
        FirstPlayerMode::Computer => Player::Computer,
        FirstPlayerMode::Random => {
            if rng.random_bool() {
                Player::Human
            } else {
                Player::Computer
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    fn human_first() -> (TicTacToeGame, SessionRng) {
        let mut rng = SessionRng::new(42);
        let game = TicTacToeGame::new(FirstPlayerMode::Human, &mut rng);
        (game, rng)
    }

    #[test]
    fn test_human_first_starts_with_empty_board() {
        let (game, _) = human_first();

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_player(), Player::Human);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.moves_played(), 0);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_computer_first_moves_immediately() {
        let mut rng = SessionRng::new(1);
        let game = TicTacToeGame::new(FirstPlayerMode::Computer, &mut rng);

        assert_eq!(game.first_player(), Player::Computer);
        assert_eq!(game.current_player(), Player::Human);
        assert_eq!(game.moves_played(), 1);
        assert_eq!(game.board().mark_count(Player::Computer), 1);
        assert_eq!(game.last_move(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_human_move_gets_computer_reply() {
        let (mut game, _) = human_first();

        let status = game.play_human_move(Position::new(0, 0)).unwrap();

        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(game.moves_played(), 2);
        assert_eq!(game.current_player(), Player::Human);
        assert_eq!(game.last_move(), Some(Position::new(1, 1)));
        assert_eq!(game.board().cell(Position::new(1, 1)), Cell::MarkedBy(Player::Computer));
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_side_effects() {
        let (mut game, _) = human_first();
        game.play_human_move(Position::new(0, 0)).unwrap();
        let board_before = game.board().clone();

        let result = game.play_human_move(Position::new(1, 1));

        assert_eq!(result, Err(GameError::CellOccupied(Position::new(1, 1))));
        assert_eq!(game.board(), &board_before);
        assert_eq!(game.moves_played(), 2);
    }

    #[test]
    fn test_out_of_bounds_move_is_rejected() {
        let (mut game, _) = human_first();

        let result = game.play_human_move(Position::new(0, 5));
        assert_eq!(result, Err(GameError::OutOfBounds { row: 0, col: 5 }));
    }

    /// Human always takes the first free cell in row-major order.
    fn play_first_free_cells(game: &mut TicTacToeGame) {
        while !game.status().is_over() {
            let Some(pos) = game.board().empty_cells().next() else {
                break;
            };
            game.play_human_move(pos).unwrap();
        }
    }

    #[test]
    fn test_computer_wins_against_first_free_cell_play() {
        let (mut game, _) = human_first();

        play_first_free_cells(&mut game);

        assert_eq!(game.status(), GameStatus::ComputerWon);
        assert_eq!(game.moves_played(), 6);
        assert_eq!(game.last_move(), Some(Position::new(2, 0)));
        let line = game.winning_line().unwrap();
        assert_eq!(line.player, Player::Computer);
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let (mut game, _) = human_first();
        play_first_free_cells(&mut game);

        assert!(game.status().is_over());
        assert_eq!(game.play_human_move(Position::new(2, 2)), Err(GameError::GameOver));
    }

    #[test]
    fn test_restart_resets_board_and_turn() {
        let (mut game, mut rng) = human_first();
        game.play_human_move(Position::new(0, 0)).unwrap();

        game.restart(&mut rng);

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_player(), Player::Human);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.moves_played(), 0);
    }

    #[test]
    fn test_random_mode_is_reproducible_by_seed() {
        for seed in 0..16 {
            let first = TicTacToeGame::new(FirstPlayerMode::Random, &mut SessionRng::new(seed));
            let second = TicTacToeGame::new(FirstPlayerMode::Random, &mut SessionRng::new(seed));
            assert_eq!(first.first_player(), second.first_player());
            assert_eq!(first.board(), second.board());
        }
    }
}
