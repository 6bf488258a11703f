mod board;
mod bot_controller;
mod controller;
mod error;
mod history;
mod session;
mod types;
mod win_detector;

pub use board::{apply_move, cell_coords, get_available_moves, is_valid_move};
pub use bot_controller::{SearchReport, evaluate_position, select_move, select_move_with_report};
pub use controller::{GameBroadcaster, GameController};
pub use error::{GameError, IllegalMoveReason};
pub use history::{History, jump_to, record_move};
pub use session::{AiMoveTicket, GameSession, MoveEntry, StateSnapshot};
pub use types::{BOARD_SIZE, CELL_COUNT, GameMode, Mark, Outcome, Position, WinningLine, mark_for_ply};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, outcome};
