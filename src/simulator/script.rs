//! Input script parsing.
//!
//! A script is a comma-separated list of segments `ACTIONS[*N]`: `ACTIONS`
//! joins `left`, `right`, `jump` or `idle` with `+`, and the segment holds
//! them for `N` frames (default 1).
//!
//! ```text
//! right*40, right+jump, right*60, idle*30
//! ```

use crate::core::input::Action;
use crate::error::{GameError, Result};

/// A run of frames with the same actions held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub actions: Vec<Action>,
    pub frames: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub segments: Vec<Segment>,
}

impl Script {
    pub fn total_frames(&self) -> u64 {
        self.segments.iter().map(|s| s.frames).sum()
    }

    /// Actions held on `frame` (0-based). Empty past the end of the script.
    pub fn actions_at(&self, frame: u64) -> &[Action] {
        let mut start = 0;
        for segment in &self.segments {
            if frame < start + segment.frames {
                return &segment.actions;
            }
            start += segment.frames;
        }
        &[]
    }
}

fn parse_action(word: &str) -> Result<Option<Action>> {
    match word {
        "left" | "l" => Ok(Some(Action::MoveLeft)),
        "right" | "r" => Ok(Some(Action::MoveRight)),
        "jump" | "j" | "up" => Ok(Some(Action::Jump)),
        "idle" | "_" => Ok(None),
        other => Err(GameError::Script(format!("unknown action '{}'", other))),
    }
}

fn parse_segment(raw: &str) -> Result<Segment> {
    let (actions_part, frames) = match raw.split_once('*') {
        Some((actions, count)) => {
            let count = count.trim();
            let frames = count.parse::<u64>().map_err(|_| {
                GameError::Script(format!("bad frame count '{}' in '{}'", count, raw))
            })?;
            (actions, frames)
        }
        None => (raw, 1),
    };

    let mut actions = Vec::new();
    for word in actions_part.split('+') {
        let word = word.trim().to_ascii_lowercase();
        if word.is_empty() {
            return Err(GameError::Script(format!("empty action in '{}'", raw)));
        }
        if let Some(action) = parse_action(&word)? {
            if !actions.contains(&action) {
                actions.push(action);
            }
        }
    }

    Ok(Segment { actions, frames })
}

/// Parse a script. An empty or all-whitespace script is valid and empty.
pub fn parse_script(src: &str) -> Result<Script> {
    let segments = src
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_segment)
        .collect::<Result<Vec<_>>>()?;
    Ok(Script { segments })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_script() {
        let script = parse_script("right*40, right+jump, idle*3").unwrap();
        assert_eq!(script.segments.len(), 3);
        assert_eq!(script.segments[0].actions, vec![Action::MoveRight]);
        assert_eq!(script.segments[0].frames, 40);
        assert_eq!(script.segments[1].actions, vec![Action::MoveRight, Action::Jump]);
        assert_eq!(script.segments[1].frames, 1);
        assert!(script.segments[2].actions.is_empty());
        assert_eq!(script.total_frames(), 44);
    }

    #[test]
    fn test_short_names_and_case() {
        let script = parse_script("R*2,L+J,UP").unwrap();
        assert_eq!(script.segments[0].actions, vec![Action::MoveRight]);
        assert_eq!(script.segments[1].actions, vec![Action::MoveLeft, Action::Jump]);
        assert_eq!(script.segments[2].actions, vec![Action::Jump]);
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(parse_script("").unwrap().total_frames(), 0);
        assert_eq!(parse_script("  ,  ").unwrap().segments.len(), 0);
    }

    #[test]
    fn test_rejects_unknown_action() {
        assert!(matches!(parse_script("right,fly"), Err(GameError::Script(_))));
    }

    #[test]
    fn test_rejects_bad_count() {
        assert!(matches!(parse_script("right*lots"), Err(GameError::Script(_))));
        assert!(matches!(parse_script("right*-3"), Err(GameError::Script(_))));
    }

    #[test]
    fn test_rejects_dangling_plus() {
        assert!(parse_script("right+").is_err());
    }

    #[test]
    fn test_actions_at() {
        let script = parse_script("right*2,jump,idle*2").unwrap();
        assert_eq!(script.actions_at(0), &[Action::MoveRight]);
        assert_eq!(script.actions_at(1), &[Action::MoveRight]);
        assert_eq!(script.actions_at(2), &[Action::Jump]);
        assert!(script.actions_at(3).is_empty());
        assert!(script.actions_at(99).is_empty());
    }
}
