//! A play session: the current game plus the best score seen so far.
//! Nothing here outlives the process.

use super::types::Game;
use crate::config::GameConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub game: Game,
    best_score: u32,
    games_played: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self> {
        let game = Game::new(&config)?;
        Ok(Self {
            config,
            game,
            best_score: 0,
            games_played: 1,
        })
    }

    /// Best score across every game of this session, including the current one.
    pub fn best_score(&self) -> u32 {
        self.best_score.max(self.game.score)
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Bank the current score and start over on the first level.
    pub fn restart(&mut self) -> Result<()> {
        let game = Game::new(&self.config)?;
        self.best_score = self.best_score();
        tracing::info!(
            previous_score = self.game.score,
            best = self.best_score,
            "restarting"
        );
        self.game = game;
        self.games_played += 1;
        Ok(())
    }
}
