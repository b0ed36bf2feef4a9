use std::io::{self, BufRead, BufReader, Stdin};

use crate::game_state::outcome::Outcome;
use crate::game_state::player::Player;
use crate::input_handler::{parse_player_input, InputError, PlayerInput};

pub trait InputSource {
    fn get_input(
        &mut self,
        current_turn: Player,
        outcome: Outcome,
    ) -> Result<PlayerInput, InputError>;
}

/// Reads commands typed by a person.
pub struct HumanInput<R: BufRead> {
    reader: R,
}

impl HumanInput<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> HumanInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for HumanInput<R> {
    fn get_input(
        &mut self,
        _current_turn: Player,
        _outcome: Outcome,
    ) -> Result<PlayerInput, InputError> {
        parse_player_input(&mut self.reader)
    }
}

/// Lets the engine move for both sides, stopping once the game is decided.
pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_input(
        &mut self,
        _current_turn: Player,
        outcome: Outcome,
    ) -> Result<PlayerInput, InputError> {
        if outcome.is_terminal() {
            Ok(PlayerInput::Exit)
        } else {
            Ok(PlayerInput::UseEngine)
        }
    }
}

/// A person plays `human_player`; the engine plays the other side. Once the
/// game is decided the person gets the prompt back to undo, reset or exit.
pub struct ConditionalInput<R: BufRead> {
    pub human_player: Player,
    human: HumanInput<R>,
}

impl ConditionalInput<BufReader<Stdin>> {
    pub fn stdin(human_player: Player) -> Self {
        Self::new(human_player, BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> ConditionalInput<R> {
    pub fn new(human_player: Player, reader: R) -> Self {
        Self {
            human_player,
            human: HumanInput::new(reader),
        }
    }
}

impl<R: BufRead> InputSource for ConditionalInput<R> {
    fn get_input(
        &mut self,
        current_turn: Player,
        outcome: Outcome,
    ) -> Result<PlayerInput, InputError> {
        if current_turn == self.human_player || outcome.is_terminal() {
            self.human.get_input(current_turn, outcome)
        } else {
            Ok(PlayerInput::UseEngine)
        }
    }
}
