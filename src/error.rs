//! Error type shared by the library and both binaries.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while setting up or driving a game.
///
/// The per-frame step itself never fails; everything here happens at the
/// edges (level lookup, configuration, terminal I/O, simulator scripts).
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no such level: {0}")]
    UnknownLevel(u32),

    #[error("failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid script: {0}")]
    Script(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_message() {
        assert_eq!(GameError::UnknownLevel(7).to_string(), "no such level: 7");
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(GameError::Io(_))));
    }
}
