//! Game state.

use crate::config::{GameConfig, WorldConfig};
use crate::core::constants::{
    DODO_HEIGHT, DODO_START_X, DODO_START_Y, DUTCHMAN_START_X, DUTCHMAN_START_Y,
};
use crate::entities::{Dodo, Dutchman, FruitKind, Platform};
use crate::error::Result;
use crate::levels::{self, FIRST_LEVEL};
use serde::Serialize;

/// `Playing → GameOver` happens once, when the Dutchman catches the Dodo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Everything that happened during one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Fruit picked up this step, in platform order.
    pub collected: Vec<FruitKind>,
    /// Platform the Dodo ended the step standing on.
    pub landed_on: Option<usize>,
    /// New level number, if the Dodo walked into the next level.
    pub level_changed: Option<u32>,
    pub game_over: bool,
}

impl StepEvents {
    pub fn score_gained(&self) -> u32 {
        self.collected.iter().map(|k| k.value()).sum()
    }

    pub fn is_quiet(&self) -> bool {
        self.collected.is_empty() && self.level_changed.is_none() && !self.game_over
    }

    /// Short player-facing line for pickups and level changes. Game over has
    /// its own modal, so it is left out.
    pub fn notice(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.collected.is_empty() {
            let names: Vec<&str> = self.collected.iter().map(|k| k.name()).collect();
            parts.push(format!("+{} {}", self.score_gained(), names.join(", ")));
        }
        if let Some(level) = self.level_changed {
            let name = levels::level_spec(level).map(|spec| spec.name).unwrap_or("?");
            parts.push(format!("Level {}: {}", level, name));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("  "))
        }
    }
}

/// One game session's simulation state. Owned explicitly by whoever drives it.
#[derive(Debug, Clone)]
pub struct Game {
    pub world: WorldConfig,
    pub dodo: Dodo,
    pub dutchman: Dutchman,
    pub platforms: Vec<Platform>,
    pub level: u32,
    pub score: u32,
    pub phase: GamePhase,
    /// Steps run so far.
    pub frame: u64,

    // -- Timing --
    /// Milliseconds per step.
    pub tick_ms: u64,
    /// Sub-step time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
}

/// Spawn height, lifted so the Dodo never starts below the floor.
fn spawn_y(config: &GameConfig) -> f64 {
    DODO_START_Y.min(config.world.ground_level - DODO_HEIGHT)
}

impl Game {
    /// A fresh game on the first level.
    pub fn new(config: &GameConfig) -> Result<Self> {
        Self::at_level(config, FIRST_LEVEL)
    }

    /// A fresh game starting on `level`.
    pub fn at_level(config: &GameConfig, level: u32) -> Result<Self> {
        let platforms = levels::build_platforms(level)?;
        tracing::info!(level, "starting game");
        Ok(Self {
            world: config.world,
            dodo: Dodo::new(DODO_START_X, spawn_y(config), &config.physics),
            dutchman: Dutchman::new(DUTCHMAN_START_X, DUTCHMAN_START_Y),
            platforms,
            level,
            score: 0,
            phase: GamePhase::Playing,
            frame: 0,
            tick_ms: config.timing.tick_ms,
            accumulated_time_ms: 0,
        })
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level_name(&self) -> &'static str {
        levels::level_spec(self.level)
            .map(|spec| spec.name)
            .unwrap_or("?")
    }

    /// Fruit still waiting to be picked up on the current level.
    pub fn remaining_fruit(&self) -> usize {
        self.platforms.iter().map(|p| p.remaining_fruit().count()).sum()
    }
}
