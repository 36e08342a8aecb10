//! The simulation: game state, the per-frame step, render snapshots and
//! the restartable session wrapped around them.

pub mod logic;
pub mod scene;
pub mod session;
pub mod types;

pub use logic::tick;
pub use scene::{DodoView, DutchmanView, FruitView, PlatformView, Scene};
pub use session::Session;
pub use types::{Game, GamePhase, StepEvents};
