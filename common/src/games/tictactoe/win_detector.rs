use super::types::{Mark, Outcome, Position, WinningLine};

/// Rows, then columns, then diagonals. Scan order decides which line is
/// reported when several are complete.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(position: &Position) -> Option<WinningLine> {
    let cells = position.cells();
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            Some(WinningLine::new(mark, line))
        } else {
            None
        }
    })
}

pub fn check_win(position: &Position) -> Option<Mark> {
    check_win_with_line(position).map(|line| line.mark)
}

pub fn outcome(position: &Position) -> Outcome {
    if let Some(line) = check_win_with_line(position) {
        return Outcome::Win(line);
    }

    if position.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
