//! Simulation configuration.

use crate::config::GameConfig;

/// Configuration for one headless run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Game settings (world, physics, timing).
    pub game: GameConfig,

    /// Script driving the input, see [`crate::simulator::parse_script`].
    pub script: String,

    /// Frames to run. `None` = the script's own length.
    pub frames: Option<u64>,

    /// Keep a record of every frame that had events.
    pub record_frames: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            script: String::new(),
            frames: None,
            record_frames: true,
        }
    }
}

impl SimConfig {
    /// Quick config for running a script as-is.
    pub fn from_script(script: &str) -> Self {
        Self {
            script: script.to_string(),
            ..Default::default()
        }
    }
}
