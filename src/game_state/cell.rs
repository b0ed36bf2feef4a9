use super::player::Player;

/// The contents of a single square on the board.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Swaps the marker in an occupied cell for the opponent's.
    pub fn flipped(&self) -> Self {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Occupied(player) => Cell::Occupied(player.opposite()),
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.to_char(),
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'x' | 'X' => Some(Cell::Occupied(Player::X)),
            'o' | 'O' => Some(Cell::Occupied(Player::O)),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for cell in [Cell::Empty, Cell::Occupied(Player::X), Cell::Occupied(Player::O)] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
    }

    #[test]
    fn test_dash_is_empty() {
        assert_eq!(Cell::from_char('-'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('?'), None);
    }

    #[test]
    fn test_flipped() {
        assert_eq!(Cell::Empty.flipped(), Cell::Empty);
        assert_eq!(Cell::from(Player::X).flipped(), Cell::from(Player::O));
    }
}
