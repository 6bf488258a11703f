use super::error::GameError;
use super::types::{CELL_COUNT, Mark, Position, mark_for_ply};

/// Positions from the empty board onward; entry `k` is the board after `k` moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    positions: Vec<Position>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            positions: vec![Position::empty()],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: a history holds at least the starting position.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, move_index: usize) -> Option<&Position> {
        self.positions.get(move_index)
    }

    pub fn last(&self) -> &Position {
        // Non-empty by construction.
        &self.positions[self.positions.len() - 1]
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    fn check_index(&self, move_index: usize) -> Result<(), GameError> {
        if move_index < self.positions.len() {
            Ok(())
        } else {
            Err(GameError::IndexOutOfRange {
                index: move_index,
                len: self.positions.len(),
            })
        }
    }
}

/// Validates a jump target and returns it as the new cursor.
pub fn jump_to(history: &History, move_index: usize) -> Result<usize, GameError> {
    history.check_index(move_index)?;
    Ok(move_index)
}

/// True if `next` is `base` plus exactly one mark of the player on turn at `ply`.
fn follows(base: &Position, next: &Position, ply: usize) -> bool {
    let mut changed = (0..CELL_COUNT).filter(|&i| base.cells()[i] != next.cells()[i]);
    match (changed.next(), changed.next()) {
        (Some(index), None) => {
            base.cells()[index] == Mark::Empty && next.cells()[index] == mark_for_ply(ply)
        }
        _ => false,
    }
}

/// Keeps entries `0..=cursor`, appends `new_position` and returns the new
/// history with the cursor on the appended entry. `new_position` must be one
/// parity move away from the entry at `cursor`.
pub fn record_move(
    history: &History,
    cursor: usize,
    new_position: Position,
) -> Result<(History, usize), GameError> {
    history.check_index(cursor)?;

    if !follows(&history.positions[cursor], &new_position, cursor) {
        return Err(GameError::InvalidState(
            "recorded position must add one mark of the player on turn",
        ));
    }

    let mut positions = Vec::with_capacity(cursor + 2);
    positions.extend_from_slice(&history.positions[..=cursor]);
    positions.push(new_position);

    Ok((History { positions }, cursor + 1))
}
