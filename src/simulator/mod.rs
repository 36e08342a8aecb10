//! Headless simulator: drive the same step function from a scripted input
//! timeline, without a terminal.
//!
//! Useful for checking level layouts and physics tunables from the command
//! line, and for reproducing a run frame by frame.

mod config;
mod report;
mod runner;
mod script;

pub use config::SimConfig;
pub use report::{FrameRecord, SimReport};
pub use runner::run_simulation;
pub use script::{parse_script, Script, Segment};
