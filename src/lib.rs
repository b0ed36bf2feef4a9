pub mod game;
pub mod game_state;
pub mod input_handler;
pub mod prelude;
pub mod search;
