//! Dodo - a side-scrolling platformer simulation.
//!
//! The library holds the whole simulation so both the terminal game and
//! the headless simulator drive the same step function.

pub mod build_info;
pub mod config;
pub mod core;
pub mod entities;
pub mod error;
pub mod game;
pub mod levels;
pub mod simulator;
pub mod ui;

pub use crate::config::GameConfig;
pub use crate::core::{Action, InputState, Rect};
pub use crate::error::{GameError, Result};
pub use crate::game::{Game, GamePhase, Scene, Session, StepEvents};
