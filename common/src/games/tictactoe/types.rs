use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Mark that moves at the given ply. X opens, so even plies belong to X.
pub fn mark_for_ply(ply: usize) -> Mark {
    if ply % 2 == 0 { Mark::X } else { Mark::O }
}

/// Snapshot of all nine cells, row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    cells: [Mark; CELL_COUNT],
}

impl Position {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Returns `None` for indices outside the board.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }

    /// Mark on turn, by ply parity of the number of marks placed.
    pub fn next_mark(&self) -> Mark {
        mark_for_ply(self.filled_count())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[index] = mark;
        Self { cells }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                let symbol = match cell {
                    Mark::Empty => '.',
                    mark => mark.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(WinningLine),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(line) => Some(line.mark),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            Outcome::Win(line) => Some(line),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    #[serde(rename = "human")]
    HumanVsHuman,
    #[serde(rename = "ai")]
    HumanVsAi,
}

impl GameMode {
    /// Mark played by the computer, if any.
    pub fn ai_mark(&self) -> Option<Mark> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsAi => Some(Mark::O),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HumanVsHuman => write!(f, "Human vs. Human"),
            GameMode::HumanVsAi => write!(f, "Human vs. AI"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_for_ply_alternates() {
        assert_eq!(mark_for_ply(0), Mark::X);
        assert_eq!(mark_for_ply(1), Mark::O);
        assert_eq!(mark_for_ply(8), Mark::X);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_cell_out_of_range_is_none() {
        let position = Position::empty();
        assert_eq!(position.cell(8), Some(Mark::Empty));
        assert_eq!(position.cell(9), None);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let position = Position::empty();
        let next = position.with_mark(4, Mark::X);
        assert_eq!(position.cell(4), Some(Mark::Empty));
        assert_eq!(next.cell(4), Some(Mark::X));
        assert_eq!(next.filled_count(), 1);
        assert_eq!(next.next_mark(), Mark::O);
    }

    #[test]
    fn test_display_renders_rows() {
        let position = Position::from_cells([
            Mark::X, Mark::Empty, Mark::O,
            Mark::Empty, Mark::X, Mark::Empty,
            Mark::O, Mark::Empty, Mark::Empty,
        ]);
        assert_eq!(position.to_string(), "X.O\n.X.\nO..");
    }

    #[test]
    fn test_game_mode_yaml_names() {
        let yaml = serde_yaml_ng::to_string(&GameMode::HumanVsAi).unwrap();
        assert_eq!(yaml.trim(), "ai");
        let mode: GameMode = serde_yaml_ng::from_str("human").unwrap();
        assert_eq!(mode, GameMode::HumanVsHuman);
    }
}
