//! Main simulation runner. Uses the same `step` as the interactive game.

use super::config::SimConfig;
use super::report::{FrameRecord, SimReport};
use super::script::parse_script;
use crate::core::input::InputState;
use crate::error::Result;
use crate::game::logic::step;
use crate::game::Game;
use crate::levels;

/// Run the script one frame per step and return a report.
///
/// Stops early on game over. Input is set fresh every frame from the script,
/// so there is no key-hold decay in headless runs.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    config.game.validate()?;
    let script = parse_script(&config.script)?;
    let frames = config.frames.unwrap_or_else(|| script.total_frames());

    let mut game = Game::new(&config.game)?;
    let mut input = InputState::new(1);
    let mut records = Vec::new();
    let mut fruit_collected = 0;
    let mut frames_run = 0;

    for frame in 0..frames {
        input.set_pressed(script.actions_at(frame));
        let events = step(&mut game, &input);
        frames_run += 1;
        fruit_collected += events.collected.len() as u32;

        if config.record_frames && !events.is_quiet() {
            records.push(FrameRecord::new(game.frame, &events, game.score));
        }
        if events.game_over {
            break;
        }
    }

    tracing::info!(
        frames_run,
        level = game.level,
        score = game.score,
        game_over = game.is_over(),
        "simulation finished"
    );

    let level_fruit_value = levels::level_spec(game.level)?.total_fruit_value();

    Ok(SimReport {
        frames_run,
        final_level: game.level,
        final_score: game.score,
        game_over: game.is_over(),
        fruit_collected,
        fruit_remaining: game.remaining_fruit(),
        level_fruit_value,
        records,
        final_scene: game.scene(),
    })
}
