//! The Dutchman: marches back and forth along a fixed stretch of ground.

use crate::core::constants::{
    DUTCHMAN_FRAME_COUNT, DUTCHMAN_FRAME_INTERVAL, DUTCHMAN_HEIGHT, DUTCHMAN_MAX_DISTANCE,
    DUTCHMAN_WIDTH,
};
use crate::core::geometry::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct Dutchman {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// +1 marching right, -1 marching left.
    pub direction: f64,
    /// Distance covered since the last turn, in `0..=max_distance`.
    pub distance: f64,
    pub max_distance: f64,
    pub frame: u32,
    frame_timer: u32,
}

impl Dutchman {
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_size(x, y, DUTCHMAN_WIDTH, DUTCHMAN_HEIGHT)
    }

    pub fn with_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            direction: 1.0,
            distance: 0.0,
            max_distance: DUTCHMAN_MAX_DISTANCE,
            frame: 0,
            frame_timer: 0,
        }
    }

    /// Start marching left instead of right.
    #[cfg(test)]
    pub fn facing_left(mut self) -> Self {
        self.direction = -1.0;
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// One step of patrol plus the animation timer.
    pub fn update(&mut self) {
        self.x += self.direction;
        self.distance += self.direction.abs();

        if self.distance >= self.max_distance {
            self.direction = -self.direction;
            self.distance = 0.0;
        }

        self.frame_timer += 1;
        if self.frame_timer >= DUTCHMAN_FRAME_INTERVAL {
            self.frame_timer = 0;
            self.frame = (self.frame + 1) % DUTCHMAN_FRAME_COUNT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marches_right_first() {
        let mut d = Dutchman::new(380.0, 350.0);
        d.update();
        assert!((d.x - 381.0).abs() < f64::EPSILON);
        assert!((d.distance - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_turns_after_max_distance() {
        let mut d = Dutchman::new(380.0, 350.0);
        for _ in 0..200 {
            d.update();
        }
        assert!((d.x - 580.0).abs() < f64::EPSILON);
        assert!((d.direction - (-1.0)).abs() < f64::EPSILON);
        assert!((d.distance).abs() < f64::EPSILON);
        d.update();
        assert!((d.x - 579.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_patrol_stays_in_range_for_both_directions() {
        for start in [Dutchman::new(380.0, 350.0), Dutchman::new(380.0, 350.0).facing_left()] {
            let mut d = start;
            let initial = d.x;
            for _ in 0..2_000 {
                d.update();
                assert!(d.x >= initial - d.max_distance && d.x <= initial + d.max_distance);
                assert!(d.distance >= 0.0 && d.distance <= d.max_distance);
            }
        }
    }

    #[test]
    fn test_animation_is_independent_of_position() {
        let mut d = Dutchman::new(0.0, 0.0);
        for _ in 0..DUTCHMAN_FRAME_INTERVAL - 1 {
            d.update();
        }
        assert_eq!(d.frame, 0);
        d.update();
        assert_eq!(d.frame, 1);
        for _ in 0..DUTCHMAN_FRAME_INTERVAL * 7 {
            d.update();
        }
        assert_eq!(d.frame, 0);
    }

    #[test]
    fn test_rect_matches_size() {
        let d = Dutchman::new(380.0, 350.0);
        assert_eq!(d.rect(), Rect::new(380.0, 350.0, 200.0, 220.0));
    }
}
