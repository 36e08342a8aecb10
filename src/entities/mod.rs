//! Simulation entities: the Dodo, the Dutchman, platforms and their fruit.

pub mod dodo;
pub mod dutchman;
pub mod fruit;
pub mod platform;

pub use dodo::{Dodo, Facing, Motion, MoveOutcome};
pub use dutchman::Dutchman;
pub use fruit::{Fruit, FruitKind};
pub use platform::{Margins, Platform};
