use tictactoe_engine::games::tictactoe::{BOARD_SIZE, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Restart,
    Help,
    Quit,
}

/// Accepts `<row> <col>` (1-based, space or comma separated), a single keypad
/// digit `1`-`9` counted row by row, or a word command.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let trimmed = input.trim().to_lowercase();

    match trimmed.as_str() {
        "" => return Err("Enter a move, or 'h' for help".to_string()),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "restart" => return Ok(Command::Restart),
        "h" | "help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => parse_keypad(cell),
        [row, col] => Ok(Command::Place(Position::new(
            parse_coordinate(row)?,
            parse_coordinate(col)?,
        ))),
        _ => Err(format!("Unknown command '{}'", input.trim())),
    }
}

fn parse_keypad(cell: &str) -> Result<Command, String> {
    let number: usize = cell
        .parse()
        .map_err(|_| format!("Unknown command '{}'", cell))?;

    if !(1..=BOARD_SIZE * BOARD_SIZE).contains(&number) {
        return Err(format!("Cell number must be between 1 and {}", BOARD_SIZE * BOARD_SIZE));
    }

    let index = number - 1;
    Ok(Command::Place(Position::new(index / BOARD_SIZE, index % BOARD_SIZE)))
}

fn parse_coordinate(value: &str) -> Result<usize, String> {
    let number: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;

    if !(1..=BOARD_SIZE).contains(&number) {
        return Err(format!("Row and column must be between 1 and {}", BOARD_SIZE));
    }

    Ok(number - 1)
}
