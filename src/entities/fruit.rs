//! Collectible fruit.

use crate::core::constants::FRUIT_SIZE;
use crate::core::geometry::Rect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FruitKind {
    Berry,
    Banana,
    Melon,
}

impl FruitKind {
    /// Score awarded when collected.
    pub fn value(self) -> u32 {
        match self {
            FruitKind::Berry => 10,
            FruitKind::Banana => 50,
            FruitKind::Melon => 100,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FruitKind::Berry => "berry",
            FruitKind::Banana => "banana",
            FruitKind::Melon => "melon",
        }
    }
}

/// A one-shot pickup. `collected` only ever goes from false to true.
#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    pub rect: Rect,
    pub kind: FruitKind,
    collected: bool,
}

impl Fruit {
    pub fn new(x: f64, y: f64, kind: FruitKind) -> Self {
        Self {
            rect: Rect::new(x, y, FRUIT_SIZE, FRUIT_SIZE),
            kind,
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.rect.overlaps(other)
    }

    /// Collect the fruit if `actor` touches it. Returns the score earned,
    /// which is `None` for misses and for fruit already taken.
    pub fn try_collect(&mut self, actor: &Rect) -> Option<u32> {
        if self.collected || !self.overlaps(actor) {
            return None;
        }
        self.collected = true;
        Some(self.kind.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(FruitKind::Berry.value(), 10);
        assert_eq!(FruitKind::Banana.value(), 50);
        assert_eq!(FruitKind::Melon.value(), 100);
    }

    #[test]
    fn test_new_fruit_is_fixed_size_and_uncollected() {
        let fruit = Fruit::new(10.0, 20.0, FruitKind::Berry);
        assert!((fruit.rect.width - 50.0).abs() < f64::EPSILON);
        assert!((fruit.rect.height - 50.0).abs() < f64::EPSILON);
        assert!(!fruit.is_collected());
    }

    #[test]
    fn test_collect_once() {
        let mut fruit = Fruit::new(0.0, 0.0, FruitKind::Banana);
        let actor = Rect::new(25.0, 25.0, 200.0, 200.0);
        assert_eq!(fruit.try_collect(&actor), Some(50));
        assert!(fruit.is_collected());
        assert_eq!(fruit.try_collect(&actor), None);
        assert!(fruit.is_collected());
    }

    #[test]
    fn test_miss_does_not_collect() {
        let mut fruit = Fruit::new(0.0, 0.0, FruitKind::Berry);
        let actor = Rect::new(50.0, 0.0, 200.0, 200.0);
        assert_eq!(fruit.try_collect(&actor), None);
        assert!(!fruit.is_collected());
    }
}
