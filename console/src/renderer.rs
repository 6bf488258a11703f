use std::io::Write;

use common::log;
use common::tictactoe::{BOARD_SIZE, GameBroadcaster, Mark, StateSnapshot};

pub fn render_snapshot(snapshot: &StateSnapshot, show_move_list: bool) -> String {
    let winning_line = snapshot.outcome.winning_line();
    let mut lines = Vec::new();

    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let index = row * BOARD_SIZE + col;
                let symbol = match snapshot.position.cells()[index] {
                    Mark::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or(' '),
                    mark => mark.symbol(),
                };
                if winning_line.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        if row > 0 {
            lines.push("---+---+---".to_string());
        }
        lines.push(cells.join("|"));
    }

    lines.push(String::new());
    lines.push(format!("{} | {}", snapshot.status, snapshot.mode));

    if show_move_list {
        for entry in &snapshot.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            lines.push(format!("{} {}. {}", marker, entry.move_index, entry.description));
        }
    }

    lines.join("\n")
}

/// Prints every broadcast position to a writer.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    show_move_list: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, show_move_list: bool) -> Self {
        Self { out, show_move_list }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameBroadcaster for ConsoleRenderer<W> {
    fn broadcast_state(&mut self, snapshot: &StateSnapshot) {
        let text = render_snapshot(snapshot, self.show_move_list);
        if let Err(e) = writeln!(self.out, "{}\n", text) {
            log!("Failed to render board: {}", e);
        }
    }
}
