//! Cell coordinates as typed at the prompt: a row letter `a`-`c` (top to
//! bottom) followed by a column digit `1`-`3` (left to right).

use crate::game_state::CELL_COUNT;

const ROWS: [char; 3] = ['a', 'b', 'c'];
const COLUMNS: [char; 3] = ['1', '2', '3'];

/// Maps `"b2"` style coordinates to a cell index.
pub fn cell_from_notation(notation: &str) -> Option<usize> {
    let mut chars = notation.chars();
    let row = chars.next()?.to_ascii_lowercase();
    let col = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let row = ROWS.iter().position(|&r| r == row)?;
    let col = COLUMNS.iter().position(|&c| c == col)?;
    Some(row * 3 + col)
}

/// Formats a cell index as `"b2"` style coordinates.
pub fn cell_to_notation(index: usize) -> Option<String> {
    if index >= CELL_COUNT {
        return None;
    }
    Some(format!("{}{}", ROWS[index / 3], COLUMNS[index % 3]))
}
