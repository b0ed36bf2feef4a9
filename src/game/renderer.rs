use crate::game::display::GameDisplay;
use crate::game::engine::Engine;
use crate::game_state::player::Player;
use std::time::Duration;

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player);
    fn frame_delay(&self) -> Option<Duration>;
}

const PROMPT: &str = "Enter a move (a1-c3), blank for the engine, '-' to undo, 'r' to reset, 'exit' to quit:";

fn format_stats(engine: &Engine) -> String {
    let stats = engine.get_search_stats();
    format!(
        "* Value: {}\n* Nodes searched: {} (pruning: {})\n* Move took: {}",
        stats.last_value.map_or("-".to_string(), |v| v.to_string()),
        stats.nodes,
        engine.pruning(),
        stats
            .last_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, _current_turn: Player) {
        ui.render_game_state(engine.state(), None);
        println!("{}", PROMPT);
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, _current_turn: Player) {
        let stats_display = format_stats(engine);
        ui.render_game_state(engine.state(), Some(&stats_display));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

pub struct ConditionalStatsRenderer {
    pub human_player: Player,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player) {
        let stats_display = format_stats(engine);
        ui.render_game_state(engine.state(), Some(&stats_display));
        if current_turn == self.human_player || engine.check_game_over().is_some() {
            println!("{}", PROMPT);
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
