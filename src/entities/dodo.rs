//! The player-controlled Dodo: velocity integration, world clamping and
//! landing resolution.

use super::platform::Platform;
use crate::config::PhysicsConfig;
use crate::core::constants::{
    DODO_FRAME_INTERVAL, DODO_HEIGHT, DODO_SPRITE_COLUMNS, DODO_SPRITE_ROWS, DODO_WIDTH,
};
use crate::core::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Vertical motion state. Only `Grounded` allows a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    Grounded,
    Ascending,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// What happened to the Dodo during one `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Index of the last platform whose landing test passed this step.
    pub landed_on: Option<usize>,
    /// Snapped to the world floor this step.
    pub on_ground: bool,
    /// The unclamped right edge went past the world width.
    pub crossed_right_edge: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dodo {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub motion: Motion,
    pub facing: Facing,
    pub jump_height: f64,
    pub gravity: f64,
    pub walk_speed: f64,
    pub landing_tolerance: f64,

    // Sprite sheet cursor (2 columns x 3 rows)
    pub frame_col: u32,
    pub frame_row: u32,
    frame_count: u32,
}

impl Dodo {
    pub fn new(x: f64, y: f64, physics: &PhysicsConfig) -> Self {
        Self {
            x,
            y,
            width: DODO_WIDTH,
            height: DODO_HEIGHT,
            velocity_x: 0.0,
            velocity_y: 0.0,
            motion: Motion::Grounded,
            facing: Facing::Right,
            jump_height: physics.jump_height,
            gravity: physics.gravity,
            walk_speed: physics.walk_speed,
            landing_tolerance: physics.landing_tolerance,
            frame_col: 0,
            frame_row: 0,
            frame_count: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_jumping(&self) -> bool {
        self.motion != Motion::Grounded
    }

    pub fn move_left(&mut self) {
        self.velocity_x = -self.walk_speed;
        self.facing = Facing::Left;
    }

    pub fn move_right(&mut self) {
        self.velocity_x = self.walk_speed;
        self.facing = Facing::Right;
    }

    pub fn stop(&mut self) {
        self.velocity_x = 0.0;
    }

    /// Start a jump. Ignored unless grounded; there is no grace window.
    pub fn jump(&mut self) -> bool {
        if self.is_jumping() {
            return false;
        }
        self.motion = Motion::Ascending;
        self.velocity_y = -self.jump_height;
        true
    }

    /// Integrate one step and resolve support against `platforms` and the floor.
    pub fn update(
        &mut self,
        world_width: f64,
        ground_level: f64,
        platforms: &[Platform],
    ) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();

        // Gravity accumulates every step, even on the ground; landing zeroes it.
        self.x += self.velocity_x;
        self.y += self.velocity_y;
        self.velocity_y += self.gravity;

        outcome.crossed_right_edge = self.x + self.width > world_width;
        if self.x < 0.0 {
            self.x = 0.0;
        } else if self.x + self.width > world_width {
            self.x = world_width - self.width;
        }

        // Every platform is tested against the integrated position; the last
        // one that matches decides y.
        let probe = self.rect();
        let descent = self.velocity_y;
        for (index, platform) in platforms.iter().enumerate() {
            if platform.check_landing(&probe, descent, self.landing_tolerance) {
                self.y = platform.landing_y(self.height);
                self.motion = Motion::Grounded;
                self.velocity_y = 0.0;
                outcome.landed_on = Some(index);
            }
        }

        if outcome.landed_on.is_none() {
            if self.y + self.height >= ground_level {
                self.y = ground_level - self.height;
                self.motion = Motion::Grounded;
                self.velocity_y = 0.0;
                outcome.on_ground = true;
            } else if self.velocity_y < 0.0 {
                self.motion = Motion::Ascending;
            } else {
                self.motion = Motion::Falling;
            }
        }

        outcome
    }

    /// Advance the walk cycle. Only moves while walking on support.
    pub fn animate(&mut self) {
        if self.is_jumping() || self.velocity_x == 0.0 {
            return;
        }
        self.frame_count += 1;
        if self.frame_count >= DODO_FRAME_INTERVAL {
            self.frame_count = 0;
            self.frame_col += 1;
            if self.frame_col >= DODO_SPRITE_COLUMNS {
                self.frame_col = 0;
                self.frame_row = (self.frame_row + 1) % DODO_SPRITE_ROWS;
            }
        }
    }
}
