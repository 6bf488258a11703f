use super::error::GameError;
use super::types::{CELL_COUNT, Mark, Outcome, Position};
use super::win_detector::outcome;

const WIN_SCORE: i32 = 1;
const DRAW_SCORE: i32 = 0;
const LOSS_SCORE: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: usize,
    pub score: i32,
    pub nodes_visited: u64,
}

/// Picks an optimal move for `bot_mark`. Among equally scored moves the lowest
/// cell index wins.
pub fn select_move(position: &Position, bot_mark: Mark) -> Result<usize, GameError> {
    select_move_with_report(position, bot_mark).map(|report| report.best_move)
}

pub fn select_move_with_report(
    position: &Position,
    bot_mark: Mark,
) -> Result<SearchReport, GameError> {
    let opponent_mark = bot_mark
        .opponent()
        .ok_or(GameError::InvalidState("search requires a player mark"))?;

    if outcome(position).is_terminal() {
        return Err(GameError::NoLegalMoves);
    }

    let mut board = *position.cells();
    let mut nodes_visited = 0u64;
    let mut best: Option<(usize, i32)> = None;

    for index in 0..CELL_COUNT {
        if board[index] != Mark::Empty {
            continue;
        }

        board[index] = bot_mark;
        let score = minimax(&mut board, opponent_mark, bot_mark, &mut nodes_visited);
        board[index] = Mark::Empty;

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let (best_move, score) = best.ok_or(GameError::NoLegalMoves)?;
    Ok(SearchReport {
        best_move,
        score,
        nodes_visited,
    })
}

/// Game-theoretic value of `position` with `to_move` on turn, seen from
/// `bot_mark`'s side: 1 win, 0 draw, -1 loss.
pub fn evaluate_position(position: &Position, to_move: Mark, bot_mark: Mark) -> Result<i32, GameError> {
    if to_move.opponent().is_none() || bot_mark.opponent().is_none() {
        return Err(GameError::InvalidState("search requires a player mark"));
    }
    let mut board = *position.cells();
    let mut nodes_visited = 0u64;
    Ok(minimax(&mut board, to_move, bot_mark, &mut nodes_visited))
}

fn terminal_score(board: &[Mark; CELL_COUNT], bot_mark: Mark) -> Option<i32> {
    match outcome(&Position::from_cells(*board)) {
        Outcome::InProgress => None,
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::Win(line) if line.mark == bot_mark => Some(WIN_SCORE),
        Outcome::Win(_) => Some(LOSS_SCORE),
    }
}

fn minimax(
    board: &mut [Mark; CELL_COUNT],
    to_move: Mark,
    bot_mark: Mark,
    nodes_visited: &mut u64,
) -> i32 {
    *nodes_visited += 1;

    if let Some(score) = terminal_score(board, bot_mark) {
        return score;
    }

    let Some(next_mark) = to_move.opponent() else {
        return DRAW_SCORE;
    };
    let is_maximizing = to_move == bot_mark;
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in 0..CELL_COUNT {
        if board[index] != Mark::Empty {
            continue;
        }

        board[index] = to_move;
        let eval = minimax(board, next_mark, bot_mark, nodes_visited);
        board[index] = Mark::Empty;

        best = if is_maximizing { best.max(eval) } else { best.min(eval) };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::{apply_move, get_available_moves};
    use crate::games::tictactoe::types::mark_for_ply;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_takes_immediate_win() {
        let position = Position::from_cells([X, X, E, O, O, E, E, E, E]);
        assert_eq!(select_move(&position, X), Ok(2));
    }

    #[test]
    fn test_o_takes_own_win_over_block() {
        let position = Position::from_cells([X, X, E, O, O, E, X, E, E]);
        assert_eq!(select_move(&position, O), Ok(5));
    }

    #[test]
    fn test_blocks_opponent_win() {
        let position = Position::from_cells([X, X, E, E, O, E, E, E, E]);
        assert_eq!(select_move(&position, O), Ok(2));
    }

    #[test]
    fn test_answers_center_with_corner() {
        let position = Position::from_cells([E, E, E, E, X, E, E, E, E]);
        let index = select_move(&position, O).unwrap();
        assert!([0, 2, 6, 8].contains(&index), "got {}", index);
        assert_eq!(index, 0);
    }

    #[test]
    fn test_edge_reply_to_center_loses() {
        let edge_reply = Position::from_cells([E, O, E, E, X, E, E, E, E]);
        assert_eq!(evaluate_position(&edge_reply, X, O), Ok(-1));

        let corner_reply = Position::from_cells([O, E, E, E, X, E, E, E, E]);
        assert_eq!(evaluate_position(&corner_reply, X, O), Ok(0));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(evaluate_position(&Position::empty(), X, X), Ok(0));
        let report = select_move_with_report(&Position::empty(), X).unwrap();
        assert_eq!(report.score, 0);
        assert!(report.nodes_visited > 0);
    }

    #[test]
    fn test_self_play_from_empty_board_draws() {
        let mut position = Position::empty();
        let mut ply = 0;
        while !outcome(&position).is_terminal() {
            let mark = mark_for_ply(ply);
            let index = select_move(&position, mark).unwrap();
            position = apply_move(&position, index).unwrap();
            ply += 1;
        }
        assert_eq!(outcome(&position), Outcome::Draw);
        assert_eq!(ply, 9);
    }

    #[test]
    fn test_optimal_reply_to_every_opening_never_loses() {
        for opening in 0..CELL_COUNT {
            let mut position = apply_move(&Position::empty(), opening).unwrap();
            let mut ply = 1;
            while !outcome(&position).is_terminal() {
                let mark = mark_for_ply(ply);
                let index = select_move(&position, mark).unwrap();
                position = apply_move(&position, index).unwrap();
                ply += 1;
            }
            assert_ne!(outcome(&position).winner(), Some(X), "opening {}", opening);
        }
    }

    #[test]
    fn test_result_value_is_maximal() {
        let position = Position::from_cells([X, E, E, E, O, E, E, E, X]);
        let report = select_move_with_report(&position, O).unwrap();
        for index in get_available_moves(&position) {
            let child = apply_move(&position, index).unwrap();
            let value = evaluate_position(&child, X, O).unwrap();
            assert!(report.score >= value, "move {} scored {}", index, value);
        }
    }

    #[test]
    fn test_two_cells_left_ends_in_draw() {
        // Neither 4 nor 8 completes a line for either side.
        let position = Position::from_cells([X, O, X, X, E, O, O, X, E]);
        assert_eq!(outcome(&position), Outcome::InProgress);

        let first = select_move(&position, O).unwrap();
        let position = apply_move(&position, first).unwrap();
        let second = select_move(&position, X).unwrap();
        let position = apply_move(&position, second).unwrap();
        assert_eq!(outcome(&position), Outcome::Draw);
    }

    #[test]
    fn test_deterministic() {
        let position = Position::from_cells([X, E, E, E, E, E, E, E, E]);
        let first = select_move(&position, O).unwrap();
        for _ in 0..5 {
            assert_eq!(select_move(&position, O).unwrap(), first);
        }
    }

    #[test]
    fn test_does_not_mutate_input() {
        let position = Position::from_cells([X, E, O, E, X, E, E, E, E]);
        let copy = position;
        let _ = select_move(&position, O).unwrap();
        assert_eq!(position, copy);
    }

    #[test]
    fn test_terminal_position_has_no_legal_moves() {
        let won = Position::from_cells([X, X, X, O, O, E, E, E, E]);
        assert_eq!(select_move(&won, O), Err(GameError::NoLegalMoves));

        let drawn = Position::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(select_move(&drawn, X), Err(GameError::NoLegalMoves));
    }

    #[test]
    fn test_empty_mark_is_invalid_state() {
        assert!(matches!(
            select_move(&Position::empty(), E),
            Err(GameError::InvalidState(_))
        ));
    }
}
