//! Shared building blocks: tunables, rectangle math and input state.

pub mod constants;
pub mod geometry;
pub mod input;

pub use constants::*;
pub use geometry::Rect;
pub use input::{Action, InputState};
