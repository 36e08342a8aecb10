//! Level definitions and platform construction.

pub mod data;

pub use data::{FruitSpec, LevelSpec, PlatformSpec, LEVELS};

use crate::core::geometry::Rect;
use crate::entities::{Fruit, Platform};
use crate::error::{GameError, Result};

/// The level a new game starts on.
pub const FIRST_LEVEL: u32 = 1;

/// Look up a level by number. Unknown numbers are an error, never an empty level.
pub fn level_spec(number: u32) -> Result<&'static LevelSpec> {
    LEVELS
        .iter()
        .find(|level| level.number == number)
        .ok_or(GameError::UnknownLevel(number))
}

impl PlatformSpec {
    /// Build a fresh platform with uncollected fruit.
    pub fn build(&self) -> Platform {
        let rect = Rect::new(self.x, self.y, self.width, self.height);
        let fruit = self
            .fruit
            .iter()
            .map(|f| Fruit::new(self.x + f.dx, self.y + f.dy, f.kind))
            .collect();
        Platform::new(rect, self.margins, fruit)
    }
}

impl LevelSpec {
    pub fn build_platforms(&self) -> Vec<Platform> {
        self.platforms.iter().map(PlatformSpec::build).collect()
    }

    /// Sum of every fruit value on the level.
    pub fn total_fruit_value(&self) -> u32 {
        self.platforms
            .iter()
            .flat_map(|p| p.fruit.iter())
            .map(|f| f.kind.value())
            .sum()
    }
}

/// Fresh platforms for level `number`.
pub fn build_platforms(number: u32) -> Result<Vec<Platform>> {
    Ok(level_spec(number)?.build_platforms())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::FruitKind;

    #[test]
    fn test_known_levels() {
        assert_eq!(level_spec(1).unwrap().number, 1);
        assert_eq!(level_spec(2).unwrap().number, 2);
    }

    #[test]
    fn test_unknown_level_fails_loudly() {
        assert!(matches!(level_spec(0), Err(GameError::UnknownLevel(0))));
        assert!(matches!(level_spec(3), Err(GameError::UnknownLevel(3))));
        assert!(build_platforms(42).is_err());
    }

    #[test]
    fn test_level_chain_ends_at_two() {
        assert_eq!(level_spec(FIRST_LEVEL).unwrap().next, Some(2));
        assert_eq!(level_spec(2).unwrap().next, None);
    }

    #[test]
    fn test_every_successor_exists() {
        for level in LEVELS {
            if let Some(next) = level.next {
                assert!(level_spec(next).is_ok(), "level {} points at missing {}", level.number, next);
            }
        }
    }

    #[test]
    fn test_level_one_layout() {
        let platforms = build_platforms(1).unwrap();
        assert_eq!(platforms.len(), 3);
        assert_eq!(platforms[0].rect, Rect::new(500.0, 150.0, 150.0, 120.0));
        assert!((platforms[0].margins.top - 90.0).abs() < f64::EPSILON);
        assert!((platforms[0].margins.left - 80.0).abs() < f64::EPSILON);
        // Melon sits centred just above the high block
        let melon = &platforms[0].fruit[0];
        assert_eq!(melon.kind, FruitKind::Melon);
        assert_eq!(melon.rect, Rect::new(550.0, 100.0, 50.0, 50.0));
    }

    #[test]
    fn test_level_two_fruit_positions() {
        let platforms = build_platforms(2).unwrap();
        assert_eq!(platforms.len(), 4);
        let xs: Vec<f64> = platforms[0].fruit.iter().map(|f| f.rect.x).collect();
        assert_eq!(xs, vec![175.0, 225.0, 275.0]);
        assert!(platforms[0].fruit.iter().all(|f| (f.rect.y - 290.0).abs() < f64::EPSILON));
        let banana = platforms[1]
            .fruit
            .iter()
            .find(|f| f.kind == FruitKind::Banana)
            .unwrap();
        assert_eq!(banana.rect, Rect::new(825.0, 100.0, 50.0, 50.0));
        assert_eq!(level_spec(2).unwrap().total_fruit_value(), 110);
    }

    #[test]
    fn test_builds_are_independent() {
        let mut first = build_platforms(2).unwrap();
        let actor = first[0].fruit[0].rect;
        assert!(first[0].fruit[0].try_collect(&actor).is_some());
        let second = build_platforms(2).unwrap();
        assert!(second.iter().flat_map(|p| p.fruit.iter()).all(|f| !f.is_collected()));
    }
}
