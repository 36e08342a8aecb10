//! Game logic: the per-frame step and the fixed-timestep driver around it.

use super::types::{Game, GamePhase, StepEvents};
use crate::core::constants::MAX_FRAME_DT_MS;
use crate::core::input::{Action, InputState};
use crate::levels;

/// Run one frame. Does nothing once the game is over.
///
/// Order within a frame: input to velocity, jump, Dodo integration, patrol,
/// Dutchman contact, fruit pickup, level exit.
pub fn step(game: &mut Game, input: &InputState) -> StepEvents {
    let mut events = StepEvents::default();
    if game.phase == GamePhase::GameOver {
        return events;
    }
    game.frame += 1;

    // Left wins when both directions are held
    if input.is_pressed(Action::MoveLeft) {
        game.dodo.move_left();
    } else if input.is_pressed(Action::MoveRight) {
        game.dodo.move_right();
    } else {
        game.dodo.stop();
    }
    if input.is_pressed(Action::Jump) {
        game.dodo.jump();
    }

    let was_airborne = game.dodo.is_jumping();
    let outcome = game
        .dodo
        .update(game.world.width, game.world.ground_level, &game.platforms);
    game.dodo.animate();
    events.landed_on = outcome.landed_on;
    if let (true, Some(index)) = (was_airborne, outcome.landed_on) {
        tracing::debug!(platform = index, y = game.dodo.y, "landed");
    }

    game.dutchman.update();

    if game.dodo.rect().overlaps(&game.dutchman.rect()) {
        game.phase = GamePhase::GameOver;
        events.game_over = true;
        tracing::info!(
            frame = game.frame,
            level = game.level,
            score = game.score,
            "caught by the Dutchman"
        );
        return events;
    }

    let dodo_rect = game.dodo.rect();
    for platform in &mut game.platforms {
        for fruit in &mut platform.fruit {
            if let Some(value) = fruit.try_collect(&dodo_rect) {
                game.score += value;
                events.collected.push(fruit.kind);
                tracing::debug!(
                    kind = fruit.kind.name(),
                    value,
                    score = game.score,
                    "fruit collected"
                );
            }
        }
    }

    if outcome.crossed_right_edge {
        advance_level(game, &mut events);
    }

    tracing::trace!(
        frame = game.frame,
        x = game.dodo.x,
        y = game.dodo.y,
        vy = game.dodo.velocity_y,
        "step"
    );
    events
}

/// Move to the current level's successor, if it has one.
fn advance_level(game: &mut Game, events: &mut StepEvents) {
    let next = match levels::level_spec(game.level) {
        Ok(spec) => spec.next,
        Err(err) => {
            tracing::warn!(%err, "current level missing from table");
            None
        }
    };
    let Some(next) = next else {
        return;
    };

    match levels::build_platforms(next) {
        Ok(platforms) => {
            game.platforms = platforms;
            game.level = next;
            game.dodo.x = 0.0;
            events.level_changed = Some(next);
            tracing::info!(level = next, score = game.score, "entered next level");
        }
        Err(err) => tracing::warn!(%err, "level successor missing from table"),
    }
}

/// Advance the simulation by `dt_ms` of wall-clock time.
///
/// Steps in fixed `game.tick_ms` increments, decaying held input after each
/// step, and appends every step's events to `events`. Returns true if any
/// step ran.
pub fn tick(
    game: &mut Game,
    input: &mut InputState,
    dt_ms: u64,
    events: &mut Vec<StepEvents>,
) -> bool {
    if game.is_over() {
        return false;
    }

    // Clamp dt to prevent a burst of steps after a pause or lag spike
    let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);
    game.accumulated_time_ms += dt_ms;

    let tick_ms = game.tick_ms.max(1);
    let mut changed = false;
    while game.accumulated_time_ms >= tick_ms {
        game.accumulated_time_ms -= tick_ms;
        let step_events = step(game, input);
        input.decay();
        changed = true;

        let over = step_events.game_over;
        if !step_events.is_quiet() {
            events.push(step_events);
        }
        if over {
            game.accumulated_time_ms = 0;
            break;
        }
    }

    changed
}

impl Game {
    /// Run one frame with the given input. See [`step`].
    pub fn step(&mut self, input: &InputState) -> StepEvents {
        step(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::geometry::Rect;
    use crate::entities::{Fruit, FruitKind, Margins, Platform};

    fn new_game() -> Game {
        Game::new(&GameConfig::default()).unwrap()
    }

    /// A game with no platforms and the Dutchman parked far away.
    fn open_field() -> Game {
        let mut game = new_game();
        game.platforms.clear();
        game.dutchman.x = 5_000.0;
        game
    }

    fn pressed(actions: &[Action]) -> InputState {
        let mut input = InputState::default();
        input.set_pressed(actions);
        input
    }

    #[test]
    fn test_first_step_settles_on_ground() {
        let mut game = open_field();
        step(&mut game, &InputState::default());
        assert!((game.dodo.y - 400.0).abs() < f64::EPSILON);
        assert!(!game.dodo.is_jumping());
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut game = open_field();
        game.dodo.x = 300.0;
        step(&mut game, &pressed(&[Action::MoveLeft, Action::MoveRight]));
        assert!((game.dodo.x - 295.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_input_stops() {
        let mut game = open_field();
        game.dodo.x = 300.0;
        step(&mut game, &pressed(&[Action::MoveRight]));
        step(&mut game, &InputState::default());
        assert!((game.dodo.x - 305.0).abs() < f64::EPSILON);
        assert!((game.dodo.velocity_x).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jump_then_gravity() {
        let mut game = open_field();
        step(&mut game, &InputState::default());
        step(&mut game, &pressed(&[Action::Jump]));
        assert!((game.dodo.velocity_y - (-19.0)).abs() < f64::EPSILON);
        step(&mut game, &InputState::default());
        assert!((game.dodo.velocity_y - (-18.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jump_comes_back_to_ground() {
        let mut game = open_field();
        step(&mut game, &InputState::default());
        step(&mut game, &pressed(&[Action::Jump]));
        let mut frames = 0;
        while game.dodo.is_jumping() {
            step(&mut game, &InputState::default());
            frames += 1;
            assert!(frames < 100, "never landed");
        }
        assert!((game.dodo.y - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dutchman_contact_ends_game() {
        let mut game = new_game();
        game.dodo.x = 300.0;
        game.dodo.y = 300.0;
        let events = step(&mut game, &InputState::default());
        assert!(events.game_over);
        assert!(game.is_over());
    }

    #[test]
    fn test_no_updates_after_game_over() {
        let mut game = new_game();
        game.dodo.x = 300.0;
        game.dodo.y = 300.0;
        step(&mut game, &InputState::default());
        let snapshot = (
            game.dodo.clone(),
            game.dutchman.clone(),
            game.score,
            game.level,
            game.frame,
        );

        let events = step(&mut game, &pressed(&[Action::MoveRight, Action::Jump]));
        assert_eq!(events, StepEvents::default());
        assert_eq!(
            snapshot,
            (game.dodo.clone(), game.dutchman.clone(), game.score, game.level, game.frame)
        );
    }

    #[test]
    fn test_game_over_frame_skips_fruit_and_level() {
        let mut game = new_game();
        // Fruit right where the Dodo will be caught
        game.platforms.push(Platform::new(
            Rect::new(2_000.0, 2_000.0, 10.0, 10.0),
            Margins::default(),
            vec![Fruit::new(310.0, 310.0, FruitKind::Melon)],
        ));
        game.dodo.x = 300.0;
        game.dodo.y = 300.0;
        let events = step(&mut game, &InputState::default());
        assert!(events.game_over);
        assert!(events.collected.is_empty());
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_fruit_scores_once() {
        let mut game = open_field();
        game.platforms.push(Platform::new(
            Rect::new(2_000.0, 2_000.0, 10.0, 10.0),
            Margins::default(),
            vec![Fruit::new(100.0, 450.0, FruitKind::Banana)],
        ));
        let events = step(&mut game, &InputState::default());
        assert_eq!(events.collected, vec![FruitKind::Banana]);
        assert_eq!(game.score, 50);
        for _ in 0..10 {
            let events = step(&mut game, &InputState::default());
            assert!(events.collected.is_empty());
        }
        assert_eq!(game.score, 50);
    }

    #[test]
    fn test_level_transition_replaces_platforms() {
        let mut game = open_field();
        game.platforms = levels::build_platforms(1).unwrap();
        // Take the melon so we can check it does not leak into level two
        let melon = game.platforms[0].fruit[0].rect;
        assert!(game.platforms[0].fruit[0].try_collect(&melon).is_some());

        game.dodo.x = 798.0;
        step(&mut game, &InputState::default());
        let events = step(&mut game, &pressed(&[Action::MoveRight]));
        assert_eq!(events.level_changed, Some(2));
        assert_eq!(game.level, 2);
        assert!((game.dodo.x).abs() < f64::EPSILON);
        assert_eq!(game.platforms.len(), 4);
        assert!(game
            .platforms
            .iter()
            .flat_map(|p| p.fruit.iter())
            .all(|f| !f.is_collected()));
    }

    #[test]
    fn test_no_level_after_two() {
        let mut game = open_field();
        game.level = 2;
        game.platforms = levels::build_platforms(2).unwrap();
        game.dodo.x = 800.0;
        game.dodo.y = 400.0;
        for _ in 0..5 {
            let events = step(&mut game, &pressed(&[Action::MoveRight]));
            assert_eq!(events.level_changed, None);
        }
        assert_eq!(game.level, 2);
        assert!((game.dodo.x - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tick_steps_in_fixed_increments() {
        let mut game = open_field();
        let mut input = InputState::default();
        let mut events = Vec::new();

        assert!(!tick(&mut game, &mut input, 10, &mut events));
        assert_eq!(game.frame, 0);
        assert!(tick(&mut game, &mut input, 10, &mut events));
        assert_eq!(game.frame, 1);
        assert_eq!(game.accumulated_time_ms, 4);
    }

    #[test]
    fn test_tick_clamps_large_dt() {
        let mut game = open_field();
        let mut input = InputState::default();
        let mut events = Vec::new();
        tick(&mut game, &mut input, 10_000, &mut events);
        assert_eq!(game.frame, 100 / 16);
    }

    #[test]
    fn test_tick_decays_input() {
        let mut game = open_field();
        game.dodo.x = 300.0;
        let mut input = InputState::new(2);
        input.press(Action::MoveRight);
        let mut events = Vec::new();
        tick(&mut game, &mut input, 16 * 4, &mut events);
        assert_eq!(game.frame, 4);
        // Held for two steps only
        assert!((game.dodo.x - 310.0).abs() < f64::EPSILON);
        assert!(!input.is_pressed(Action::MoveRight));
    }

    #[test]
    fn test_tick_stops_on_game_over() {
        let mut game = new_game();
        game.dodo.x = 300.0;
        game.dodo.y = 300.0;
        let mut input = InputState::default();
        let mut events = Vec::new();
        assert!(tick(&mut game, &mut input, 64, &mut events));
        assert_eq!(game.frame, 1);
        assert_eq!(events.len(), 1);
        assert!(events[0].game_over);
        assert!(!tick(&mut game, &mut input, 64, &mut events));
    }
}
