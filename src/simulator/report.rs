//! Simulation report generation.

use crate::entities::FruitKind;
use crate::game::{Scene, StepEvents};
use serde::Serialize;
use std::fmt;

/// Events from one frame that had any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub collected: Vec<FruitKind>,
    pub level_changed: Option<u32>,
    pub game_over: bool,
    pub score: u32,
}

impl FrameRecord {
    pub fn new(frame: u64, events: &StepEvents, score: u32) -> Self {
        Self {
            frame,
            collected: events.collected.clone(),
            level_changed: events.level_changed,
            game_over: events.game_over,
            score,
        }
    }
}

impl fmt::Display for FrameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {:>5}:", self.frame)?;
        for kind in &self.collected {
            write!(f, " collected {} (+{})", kind.name(), kind.value())?;
        }
        if let Some(level) = self.level_changed {
            write!(f, " entered level {}", level)?;
        }
        if self.game_over {
            write!(f, " GAME OVER")?;
        }
        write!(f, " [score {}]", self.score)
    }
}

/// Result of one headless run.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub frames_run: u64,
    pub final_level: u32,
    pub final_score: u32,
    pub game_over: bool,
    pub fruit_collected: u32,
    pub fruit_remaining: usize,
    /// Points the final level's fruit is worth in total.
    pub level_fruit_value: u32,
    pub records: Vec<FrameRecord>,
    pub final_scene: Scene,
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frames run:      {}", self.frames_run)?;
        writeln!(
            f,
            "Final level:     {} ({})",
            self.final_level, self.final_scene.level_name
        )?;
        writeln!(f, "Score:           {}", self.final_score)?;
        writeln!(
            f,
            "Fruit:           {} collected, {} left on this level (worth {} in all)",
            self.fruit_collected, self.fruit_remaining, self.level_fruit_value
        )?;
        let dodo = &self.final_scene.dodo.rect;
        writeln!(f, "Dodo at:         ({:.1}, {:.1})", dodo.x, dodo.y)?;
        write!(
            f,
            "Outcome:         {}",
            if self.game_over {
                "caught by the Dutchman"
            } else {
                "still running"
            }
        )
    }
}
