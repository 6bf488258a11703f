use crate::log;
use super::board::apply_move;
use super::bot_controller::select_move_with_report;
use super::error::GameError;
use super::history::{History, jump_to, record_move};
use super::types::{GameMode, Mark, Outcome, Position, mark_for_ply};
use super::win_detector::outcome;

/// A computer move computed for one specific session state. It is only
/// accepted while the session is still at that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiMoveTicket {
    pub index: usize,
    pub mark: Mark,
    pub nodes_visited: u64,
    revision: u64,
    cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    pub move_index: usize,
    pub description: String,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub position: Position,
    pub outcome: Outcome,
    pub cursor: usize,
    pub history_len: usize,
    pub mode: GameMode,
    pub next_mark: Mark,
    pub status: String,
    pub moves: Vec<MoveEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: History,
    cursor: usize,
    mode: GameMode,
    revision: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            mode,
            revision: 0,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_position(&self) -> &Position {
        // The cursor always points inside the history.
        &self.history.positions()[self.cursor]
    }

    pub fn outcome(&self) -> Outcome {
        outcome(self.current_position())
    }

    pub fn next_mark(&self) -> Mark {
        mark_for_ply(self.cursor)
    }

    pub fn reset(&mut self) {
        log!("Game reset ({})", self.mode);
        self.history = History::new();
        self.cursor = 0;
        self.revision += 1;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        log!("Game mode changed to {}", mode);
        self.mode = mode;
        self.reset();
    }

    /// Plays `index` for whichever mark is on turn at the cursor, dropping
    /// any moves recorded after the cursor.
    pub fn play(&mut self, index: usize) -> Result<Outcome, GameError> {
        self.record(index)
    }

    pub fn jump_to(&mut self, move_index: usize) -> Result<(), GameError> {
        self.cursor = jump_to(&self.history, move_index)?;
        self.revision += 1;
        Ok(())
    }

    fn record(&mut self, index: usize) -> Result<Outcome, GameError> {
        let position = apply_move(self.current_position(), index)?;
        let (history, cursor) = record_move(&self.history, self.cursor, position)?;
        self.history = history;
        self.cursor = cursor;
        self.revision += 1;
        Ok(outcome(&position))
    }

    pub fn is_ai_due(&self) -> bool {
        self.mode.ai_mark() == Some(self.next_mark()) && !self.outcome().is_terminal()
    }

    /// Runs the search for the computer's move if it is the computer's turn.
    pub fn prepare_ai_move(&self) -> Result<Option<AiMoveTicket>, GameError> {
        if !self.is_ai_due() {
            return Ok(None);
        }

        let mark = self.next_mark();
        let report = select_move_with_report(self.current_position(), mark)?;
        Ok(Some(AiMoveTicket {
            index: report.best_move,
            mark,
            nodes_visited: report.nodes_visited,
            revision: self.revision,
            cursor: self.cursor,
        }))
    }

    /// Applies a prepared computer move. Returns `Ok(false)` without touching
    /// the session when the history or cursor changed after the ticket was
    /// issued.
    pub fn apply_ai_move(&mut self, ticket: AiMoveTicket) -> Result<bool, GameError> {
        if ticket.revision != self.revision || ticket.cursor != self.cursor {
            log!(
                "Discarding stale AI move {} computed at move #{} (now at move #{})",
                ticket.index,
                ticket.cursor,
                self.cursor
            );
            return Ok(false);
        }

        self.record(ticket.index)?;
        Ok(true)
    }

    pub fn status_text(&self) -> String {
        match self.outcome() {
            Outcome::Win(line) => format!("Winner: {}", line.mark),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.next_mark()),
        }
    }

    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|move_index| MoveEntry {
                move_index,
                description: if move_index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", move_index)
                },
                is_current: move_index == self.cursor,
            })
            .collect()
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            position: *self.current_position(),
            outcome: self.outcome(),
            cursor: self.cursor,
            history_len: self.history.len(),
            mode: self.mode,
            next_mark: self.next_mark(),
            status: self.status_text(),
            moves: self.move_list(),
        }
    }
}
