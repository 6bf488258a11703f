use crate::log;
use super::error::GameError;
use super::session::{GameSession, StateSnapshot};
use super::types::GameMode;

/// Render hook of the presentation layer. Receives every position the
/// session moves to.
pub trait GameBroadcaster {
    fn broadcast_state(&mut self, snapshot: &StateSnapshot);
}

/// Synchronous driver between a presentation layer and [`GameSession`].
/// After each human move it checks whether the computer is due and, if so,
/// plays its move before returning.
pub struct GameController<B: GameBroadcaster> {
    session: GameSession,
    broadcaster: B,
}

impl<B: GameBroadcaster> GameController<B> {
    pub fn new(mode: GameMode, broadcaster: B) -> Self {
        let mut controller = Self {
            session: GameSession::new(mode),
            broadcaster,
        };
        controller.broadcast();
        controller
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut B {
        &mut self.broadcaster
    }

    pub fn into_broadcaster(self) -> B {
        self.broadcaster
    }

    fn broadcast(&mut self) {
        let snapshot = self.session.snapshot();
        self.broadcaster.broadcast_state(&snapshot);
    }

    pub fn handle_cell(&mut self, index: usize) -> Result<(), GameError> {
        if let Err(e) = self.session.play(index) {
            log!("Rejected move at cell {}: {}", index, e);
            return Err(e);
        }
        self.broadcast();

        self.play_ai_turn()
    }

    fn play_ai_turn(&mut self) -> Result<(), GameError> {
        let Some(ticket) = self.session.prepare_ai_move()? else {
            return Ok(());
        };

        if self.session.apply_ai_move(ticket)? {
            log!(
                "AI placed {} at cell {} after visiting {} nodes",
                ticket.mark,
                ticket.index,
                ticket.nodes_visited
            );
            self.broadcast();
        }
        Ok(())
    }

    pub fn jump_to(&mut self, move_index: usize) -> Result<(), GameError> {
        self.session.jump_to(move_index)?;
        self.broadcast();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.broadcast();
    }

    pub fn change_mode(&mut self, mode: GameMode) {
        self.session.set_mode(mode);
        self.broadcast();
    }
}
