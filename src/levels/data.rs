//! Hand-authored level tables.

use crate::entities::{FruitKind, Margins};

/// Fruit placed relative to its platform's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FruitSpec {
    pub dx: f64,
    pub dy: f64,
    pub kind: FruitKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpec {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub fruit: &'static [FruitSpec],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSpec {
    pub number: u32,
    pub name: &'static str,
    /// Level entered by walking off the right edge, if any.
    pub next: Option<u32>,
    pub platforms: &'static [PlatformSpec],
}

const BLOCK_MARGINS: Margins = Margins::new(80.0, 80.0, 90.0);
const LEDGE_MARGINS: Margins = Margins::new(60.0, 60.0, 60.0);

/// 150-wide block with an inset footprint.
const fn block(x: f64, y: f64, fruit: &'static [FruitSpec]) -> PlatformSpec {
    PlatformSpec {
        x,
        y,
        width: 150.0,
        height: 120.0,
        margins: BLOCK_MARGINS,
        fruit,
    }
}

/// 300-wide ledge.
const fn ledge(x: f64, y: f64, height: f64, fruit: &'static [FruitSpec]) -> PlatformSpec {
    PlatformSpec {
        x,
        y,
        width: 300.0,
        height,
        margins: LEDGE_MARGINS,
        fruit,
    }
}

const fn above(dx: f64, kind: FruitKind) -> FruitSpec {
    FruitSpec { dx, dy: -50.0, kind }
}

// Fruit is centred 50 units above its platform unless noted.
const BLOCK_MELON: &[FruitSpec] = &[above(50.0, FruitKind::Melon)];
const BLOCK_BERRY: &[FruitSpec] = &[above(50.0, FruitKind::Berry)];
const LEDGE_BERRY: &[FruitSpec] = &[above(125.0, FruitKind::Berry)];
const LEDGE_BERRY_ROW: &[FruitSpec] = &[
    above(75.0, FruitKind::Berry),
    above(125.0, FruitKind::Berry),
    above(175.0, FruitKind::Berry),
];
const LEDGE_BERRY_AND_BANANA: &[FruitSpec] = &[
    above(125.0, FruitKind::Berry),
    // Hangs high above the ledge, reachable from a jump off it
    FruitSpec {
        dx: 175.0,
        dy: -260.0,
        kind: FruitKind::Banana,
    },
];

const HARBOUR_PLATFORMS: &[PlatformSpec] = &[
    block(500.0, 150.0, BLOCK_MELON),
    block(300.0, 350.0, BLOCK_BERRY),
    block(800.0, 350.0, BLOCK_BERRY),
];

const FOREST_PLATFORMS: &[PlatformSpec] = &[
    ledge(100.0, 340.0, 50.0, LEDGE_BERRY_ROW),
    ledge(650.0, 360.0, 90.0, LEDGE_BERRY_AND_BANANA),
    ledge(500.0, 200.0, 50.0, LEDGE_BERRY),
    ledge(20.0, 50.0, 280.0, LEDGE_BERRY),
];

pub const LEVELS: &[LevelSpec] = &[
    LevelSpec {
        number: 1,
        name: "Harbour",
        next: Some(2),
        platforms: HARBOUR_PLATFORMS,
    },
    LevelSpec {
        number: 2,
        name: "Forest",
        next: None,
        platforms: FOREST_PLATFORMS,
    },
];
