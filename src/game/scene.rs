//! Read-only render snapshot.
//!
//! A renderer gets everything it needs to draw one frame from a [`Scene`]
//! and never touches simulation state. Serializable so headless tools can
//! dump frames as JSON.

use super::types::{Game, GamePhase};
use crate::core::geometry::Rect;
use crate::entities::{Facing, FruitKind, Motion};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DodoView {
    pub rect: Rect,
    pub facing: Facing,
    pub motion: Motion,
    /// Sprite sheet cell (column, row).
    pub frame: (u32, u32),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutchmanView {
    pub rect: Rect,
    pub frame: u32,
    pub marching_left: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformView {
    pub rect: Rect,
    /// Footprint the Dodo can stand on.
    pub surface: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FruitView {
    pub rect: Rect,
    pub kind: FruitKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub frame: u64,
    pub world_width: f64,
    pub world_height: f64,
    pub ground_level: f64,
    pub level: u32,
    pub level_name: &'static str,
    pub score: u32,
    pub phase: GamePhase,
    pub dodo: DodoView,
    pub dutchman: DutchmanView,
    pub platforms: Vec<PlatformView>,
    /// Only fruit that has not been collected.
    pub fruit: Vec<FruitView>,
}

impl Game {
    pub fn scene(&self) -> Scene {
        Scene {
            frame: self.frame,
            world_width: self.world.width,
            world_height: self.world.height,
            ground_level: self.world.ground_level,
            level: self.level,
            level_name: self.level_name(),
            score: self.score,
            phase: self.phase,
            dodo: DodoView {
                rect: self.dodo.rect(),
                facing: self.dodo.facing,
                motion: self.dodo.motion,
                frame: (self.dodo.frame_col, self.dodo.frame_row),
            },
            dutchman: DutchmanView {
                rect: self.dutchman.rect(),
                frame: self.dutchman.frame,
                marching_left: self.dutchman.direction < 0.0,
            },
            platforms: self
                .platforms
                .iter()
                .map(|p| PlatformView {
                    rect: p.rect,
                    surface: p.effective_rect(),
                })
                .collect(),
            fruit: self
                .platforms
                .iter()
                .flat_map(|p| p.remaining_fruit())
                .map(|f| FruitView {
                    rect: f.rect,
                    kind: f.kind,
                })
                .collect(),
        }
    }
}
