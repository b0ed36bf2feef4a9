use super::cell::Cell;
use super::GameState;
use std::fmt;

pub const ROW_LABELS: [char; 3] = ['a', 'b', 'c'];

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    1   2   3")?;
        writeln!(f, "  ┌───┬───┬───┐")?;
        for (row, label) in ROW_LABELS.iter().enumerate() {
            write!(f, "{} │", label)?;
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => ' ',
                    Cell::Occupied(player) => player.to_char(),
                };
                write!(f, " {} │", symbol)?;
            }
            writeln!(f)?;
            if row < 2 {
                writeln!(f, "  ├───┼───┼───┤")?;
            } else {
                writeln!(f, "  └───┴───┴───┘")?;
            }
        }
        Ok(())
    }
}

/// Builds a `GameState` from a 3x3 grid of `x`, `o` and `.` tokens, with the
/// side to move derived from the marker counts.
#[macro_export]
macro_rules! tictactoe_position {
    ($($cell:tt)*) => {{
        use $crate::game_state::cell::Cell;
        // Convert all input tokens to a string and filter out whitespace characters.
        let symbols: Vec<char> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(
            symbols.len(),
            $crate::game_state::CELL_COUNT,
            "Invalid number of cells. Expected 9, got {}",
            symbols.len()
        );
        let mut cells = [Cell::Empty; $crate::game_state::CELL_COUNT];
        for (i, &c) in symbols.iter().enumerate() {
            cells[i] = Cell::from_char(c).expect("Invalid character in tic-tac-toe position");
        }
        $crate::game_state::GameState::new(cells, None)
    }};
}
