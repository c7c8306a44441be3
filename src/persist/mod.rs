//! Save-file round-tripping.
//!
//! A [`SaveState`] captures every field of a running game, including
//! the RNG position, so a restored game continues the exact playout it
//! left. Files are JSON. I/O and format problems surface as
//! [`PersistError`] at this boundary and never reach the turn engine.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Gameboard;
use crate::core::{GameParams, GameRng, GameRngState, Player, PlayerId};
use crate::game::{Game, Winner};

/// Failure at the persistence boundary.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("save file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Complete serialized game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    pub current_round: u32,
    pub game_over: bool,
    pub winners: Vec<Winner>,
    pub player_orders: BTreeMap<u32, PlayerId>,
    pub params: GameParams,
    pub players: BTreeMap<PlayerId, Player>,
    pub board: Gameboard,
    pub rng: GameRngState,
}

impl Game {
    /// Capture the full game state.
    #[must_use]
    pub fn to_save_state(&self) -> SaveState {
        SaveState {
            current_round: self.current_round,
            game_over: self.game_over,
            winners: self.winners.clone(),
            player_orders: self.player_orders.clone(),
            params: self.params.clone(),
            players: self.players.clone(),
            board: self.board.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a game from a capture.
    #[must_use]
    pub fn from_save_state(state: SaveState) -> Self {
        Self {
            board: state.board,
            players: state.players,
            player_orders: state.player_orders,
            params: state.params,
            current_round: state.current_round,
            game_over: state.game_over,
            winners: state.winners,
            rng: GameRng::from_state(&state.rng),
        }
    }

    /// Write the game to a JSON save file.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.to_save_state())?;
        fs::write(path, json)?;
        log::info!("saved game state to {}", path.display());
        Ok(())
    }

    /// Load a game from a JSON save file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let state: SaveState = serde_json::from_str(&json)?;
        log::info!("loaded game state from {}", path.display());
        Ok(Self::from_save_state(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AlwaysYes;
    use crate::game::GameBuilder;

    fn played_game() -> Game {
        let mut game = GameBuilder::new().player("Alice").player("Bob").build(42).unwrap();
        for _ in 0..5 {
            game.play_one_round(&mut AlwaysYes);
        }
        game
    }

    #[test]
    fn test_save_state_round_trip() {
        let game = played_game();

        let state = game.to_save_state();
        let json = serde_json::to_string(&state).unwrap();
        let restored: SaveState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, restored);
    }

    #[test]
    fn test_restored_game_continues_identically() {
        let mut original = played_game();
        let mut restored = Game::from_save_state(original.to_save_state());

        original.play_one_round(&mut AlwaysYes);
        restored.play_one_round(&mut AlwaysYes);

        assert_eq!(original.to_save_state(), restored.to_save_state());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = Game::load_from_path("/nonexistent/save.json");
        assert!(matches!(result, Err(PersistError::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = std::env::temp_dir();
        let path = dir.join("monoboard_malformed_save.json");
        fs::write(&path, "{ not json").unwrap();

        let result = Game::load_from_path(&path);
        assert!(matches!(result, Err(PersistError::Format(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_round_trip() {
        let game = played_game();
        let path = std::env::temp_dir().join("monoboard_round_trip_save.json");

        game.save_to_path(&path).unwrap();
        let restored = Game::load_from_path(&path).unwrap();

        assert_eq!(game.to_save_state(), restored.to_save_state());

        let _ = fs::remove_file(&path);
    }
}
