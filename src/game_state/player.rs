use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// One of the two sides. `X` always moves first from an empty board and is the
/// maximizing player during search; `O` is the minimizing player.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    pub fn opposite(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn maximize_score(&self) -> bool {
        match self {
            Player::X => true,
            Player::O => false,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }

    pub fn random() -> Self {
        *Self::ALL.choose(&mut rand::thread_rng()).unwrap()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: x, o, random"),
        }
    }
}
