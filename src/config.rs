//! Game configuration: world bounds, physics tunables and frame timing.
//!
//! Every section has defaults, so a config file only needs the values it
//! overrides:
//!
//! ```json
//! { "physics": { "gravity": 1.2 }, "timing": { "tick_ms": 20 } }
//! ```

use crate::core::constants::*;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub physics: PhysicsConfig,
    pub timing: TimingConfig,
}

/// World bounds, constant for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    /// Y coordinate of the floor; the Dodo's bottom edge rests here.
    pub ground_level: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            ground_level: GROUND_LEVEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration added to vertical velocity every step.
    pub gravity: f64,
    /// Initial upward speed of a jump.
    pub jump_height: f64,
    /// Horizontal speed while a move action is held.
    pub walk_speed: f64,
    pub landing_tolerance: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_height: JUMP_HEIGHT,
            walk_speed: WALK_SPEED,
            landing_tolerance: LANDING_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub tick_ms: u64,
    pub input_hold_ticks: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            input_hold_ticks: INPUT_HOLD_TICKS,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&raw).map_err(|source| GameError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// `load` when a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));

        if self.world.width < DODO_WIDTH {
            return invalid(format!(
                "world.width {} is narrower than the Dodo ({})",
                self.world.width, DODO_WIDTH
            ));
        }
        if self.world.height <= 0.0 {
            return invalid(format!("world.height must be positive, got {}", self.world.height));
        }
        if self.world.ground_level < DODO_HEIGHT {
            return invalid(format!(
                "world.ground_level {} leaves no room for the Dodo ({})",
                self.world.ground_level, DODO_HEIGHT
            ));
        }
        if self.world.ground_level > self.world.height {
            return invalid(format!(
                "world.ground_level {} is below the bottom of the world ({})",
                self.world.ground_level, self.world.height
            ));
        }
        if self.physics.gravity <= 0.0 {
            return invalid(format!("physics.gravity must be positive, got {}", self.physics.gravity));
        }
        if self.physics.jump_height < 0.0 || self.physics.walk_speed < 0.0 {
            return invalid("physics.jump_height and physics.walk_speed must not be negative".into());
        }
        if self.physics.landing_tolerance < 0.0 {
            return invalid(format!(
                "physics.landing_tolerance must not be negative, got {}",
                self.physics.landing_tolerance
            ));
        }
        if self.timing.tick_ms == 0 {
            return invalid("timing.tick_ms must be at least 1".into());
        }
        Ok(())
    }
}
