use common::tictactoe::{CELL_COUNT, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Place(usize),
    Jump(usize),
    Reset,
    Mode(GameMode),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9            place a mark (cells numbered left to right, top to bottom)
  jump <n>       go to move #n (0 is the game start)
  reset          start a new game
  mode human|ai  switch mode and start a new game
  help           show this text
  quit           exit";

/// Parses one line of input. Cells are entered 1-based and returned as
/// board indices.
pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty input".to_string());
    };
    let argument = parts.next();
    if parts.next().is_some() {
        return Err(format!("Too many arguments in '{}'", line.trim()));
    }

    match (head.to_ascii_lowercase().as_str(), argument) {
        ("quit" | "exit" | "q", None) => Ok(ConsoleCommand::Quit),
        ("help" | "?", None) => Ok(ConsoleCommand::Help),
        ("reset", None) => Ok(ConsoleCommand::Reset),
        ("jump", Some(arg)) => arg
            .parse::<usize>()
            .map(ConsoleCommand::Jump)
            .map_err(|_| format!("Invalid move number '{}'", arg)),
        ("mode", Some(arg)) => match arg.to_ascii_lowercase().as_str() {
            "human" => Ok(ConsoleCommand::Mode(GameMode::HumanVsHuman)),
            "ai" => Ok(ConsoleCommand::Mode(GameMode::HumanVsAi)),
            _ => Err(format!("Unknown mode '{}'", arg)),
        },
        (cell, None) => match cell.parse::<usize>() {
            Ok(number) if (1..=CELL_COUNT).contains(&number) => Ok(ConsoleCommand::Place(number - 1)),
            Ok(number) => Err(format!("Cell {} is outside 1-{}", number, CELL_COUNT)),
            Err(_) => Err(format!("Unknown command '{}'", line.trim())),
        },
        _ => Err(format!("Unknown command '{}'", line.trim())),
    }
}
