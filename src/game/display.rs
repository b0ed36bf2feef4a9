use crate::game_state::outcome::Outcome;
use crate::game_state::GameState;
use crate::input_handler::cell_to_notation;
use std::fmt::Write;
use termion::{clear, cursor};

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All).unwrap();
    }

    /// Writes a full frame (board, status, optional stats) into the buffer.
    pub fn compose_game_state(&mut self, state: &GameState, stats: Option<&str>) {
        self.clear();

        writeln!(self.buffer, "{}", state).unwrap();

        match state.outcome() {
            Outcome::Active => {
                writeln!(self.buffer, "Turn: {}", state.turn()).unwrap();
            }
            outcome => {
                writeln!(self.buffer, "Result: {}", outcome).unwrap();
            }
        }

        if let Some(notation) = state.last_move().and_then(cell_to_notation) {
            writeln!(self.buffer, "Last move: {}", notation).unwrap();
        }

        if let Some(stats) = stats {
            write!(self.buffer, "\n{}\n", stats).unwrap();
        }
    }

    pub fn render_game_state(&mut self, state: &GameState, stats: Option<&str>) {
        self.compose_game_state(state, stats);
        print!("{}", self.buffer);
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}
