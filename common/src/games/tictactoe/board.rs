use super::error::{GameError, IllegalMoveReason};
use super::types::{BOARD_SIZE, CELL_COUNT, Mark, Position};
use super::win_detector::outcome;

pub fn get_available_moves(position: &Position) -> Vec<usize> {
    position
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(position: &Position, index: usize) -> bool {
    position.cell(index) == Some(Mark::Empty) && !outcome(position).is_terminal()
}

/// Row and column of a cell index.
pub fn cell_coords(index: usize) -> (usize, usize) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

/// Places the mark on turn at `index` and returns the resulting position.
/// The input is left untouched. A finished game rejects every index.
pub fn apply_move(position: &Position, index: usize) -> Result<Position, GameError> {
    if outcome(position).is_terminal() {
        return Err(GameError::IllegalMove(IllegalMoveReason::GameOver));
    }

    if index >= CELL_COUNT {
        return Err(GameError::IndexOutOfRange {
            index,
            len: CELL_COUNT,
        });
    }

    if position.cells()[index] != Mark::Empty {
        return Err(GameError::IllegalMove(IllegalMoveReason::CellOccupied));
    }

    Ok(position.with_mark(index, position.next_mark()))
}
