use std::io::{self, BufRead, Write};
use tictactoe_engine::SessionRng;
use tictactoe_engine::games::tictactoe::TicTacToeGame;
use tictactoe_engine::log;

use crate::command::{Command, parse_command};
use crate::config::Config;
use crate::render::{describe_status, help_text, render_board};

pub struct ConsoleApp {
    game: TicTacToeGame,
    rng: SessionRng,
    config: Config,
}

impl ConsoleApp {
    pub fn new(config: Config, mut rng: SessionRng) -> Self {
        let game = TicTacToeGame::new(config.first_player, &mut rng);
        Self { game, rng, config }
    }

    pub fn game(&self) -> &TicTacToeGame {
        &self.game
    }

    /// Reads commands line by line until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", help_text())?;
        self.draw(output)?;

        for line in input.lines() {
            let line = line?;
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(output, "{}", message)?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => {
                    writeln!(output, "{}", help_text())?;
                    continue;
                }
                Command::Restart => {
                    self.game.restart(&mut self.rng);
                    log!("Game restarted, {:?} moves first", self.game.first_player());
                }
                Command::Place(pos) => match self.game.play_human_move(pos) {
                    Ok(status) if status.is_over() => {
                        log!("Game over after {} moves: {:?}", self.game.moves_played(), status);
                    }
                    Ok(_) => {}
                    Err(e) => {
                        writeln!(output, "{}", e)?;
                        continue;
                    }
                },
            }

            self.draw(output)?;
        }

        Ok(())
    }

    fn draw<W: Write>(&self, output: &mut W) -> io::Result<()> {
        write!(output, "\n{}", render_board(self.game.board(), &self.config.marks))?;
        writeln!(output, "{}", describe_status(&self.game))?;
        output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::games::tictactoe::{FirstPlayerMode, GameStatus, Player};

    fn run_with_input(config: Config, input: &str) -> (ConsoleApp, String) {
        tictactoe_engine::logger::init_logger(None, false);
        let mut app = ConsoleApp::new(config, SessionRng::new(11));
        let mut output = Vec::new();
        app.run(input.as_bytes(), &mut output).unwrap();
        (app, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_move_gets_computer_reply() {
        let (app, output) = run_with_input(Config::default(), "1 1\nq\n");

        assert_eq!(app.game().moves_played(), 2);
        assert!(output.contains("1 O . .\n2 . X .\n3 . . .\n"));
    }

    #[test]
    fn test_occupied_cell_message() {
        let (app, output) = run_with_input(Config::default(), "1\n5\nq\n");

        assert_eq!(app.game().moves_played(), 2);
        assert!(output.contains("Cell (1, 1) is already marked"));
    }

    #[test]
    fn test_unknown_command_is_reported_and_ignored() {
        let (app, output) = run_with_input(Config::default(), "jump\n");

        assert_eq!(app.game().moves_played(), 0);
        assert!(output.contains("Unknown command 'jump'"));
    }

    #[test]
    fn test_restart_after_loss() {
        let (app, output) = run_with_input(Config::default(), "1\n2\n4\nr\n");

        assert!(output.contains("Computer wins"));
        assert_eq!(app.game().status(), GameStatus::InProgress);
        assert_eq!(app.game().moves_played(), 0);
    }

    #[test]
    fn test_computer_first_config() {
        let config = Config { first_player: FirstPlayerMode::Computer, ..Config::default() };
        let (app, _) = run_with_input(config, "");

        assert_eq!(app.game().first_player(), Player::Computer);
        assert_eq!(app.game().moves_played(), 1);
    }
}
