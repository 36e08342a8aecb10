//! Landing surfaces.
//!
//! A platform's sprite has transparent padding, so the surface the Dodo can
//! actually stand on is an inset "effective" rectangle described by
//! [`Margins`].

use super::fruit::Fruit;
use crate::core::constants::{DEFAULT_MARGIN_LEFT, DEFAULT_MARGIN_RIGHT, DEFAULT_MARGIN_TOP};
use crate::core::geometry::Rect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
}

impl Margins {
    pub const fn new(left: f64, right: f64, top: f64) -> Self {
        Self { left, right, top }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN_LEFT, DEFAULT_MARGIN_RIGHT, DEFAULT_MARGIN_TOP)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    pub margins: Margins,
    pub fruit: Vec<Fruit>,
}

impl Platform {
    pub fn new(rect: Rect, margins: Margins, fruit: Vec<Fruit>) -> Self {
        Self {
            rect,
            margins,
            fruit,
        }
    }

    /// The physical footprint after the margin insets. Width may come out
    /// negative for margins wider than the sprite; the landing test still
    /// treats it as a (very narrow) span.
    pub fn effective_rect(&self) -> Rect {
        Rect::new(
            self.rect.x + self.margins.left,
            self.rect.y + self.margins.top,
            self.rect.width - self.margins.left - self.margins.right,
            self.rect.height - self.margins.top,
        )
    }

    /// Y the actor snaps to when it lands here.
    pub fn landing_y(&self, actor_height: f64) -> f64 {
        self.rect.y - actor_height + self.margins.top
    }

    /// True when a descending actor's feet are within `tolerance` of the
    /// effective top and its horizontal span reaches the effective span.
    pub fn check_landing(&self, actor: &Rect, velocity_y: f64, tolerance: f64) -> bool {
        let effective = self.effective_rect();
        let bottom = actor.bottom();

        bottom >= effective.y - tolerance
            && bottom <= effective.y + tolerance
            && velocity_y > 0.0
            && actor.right() >= effective.x
            && actor.x <= effective.x + effective.width
    }

    pub fn remaining_fruit(&self) -> impl Iterator<Item = &Fruit> {
        self.fruit.iter().filter(|f| !f.is_collected())
    }
}
