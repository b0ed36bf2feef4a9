pub mod input;
pub mod notation;

pub use input::{parse_player_input, InputError, PlayerInput};
pub use notation::{cell_from_notation, cell_to_notation};
