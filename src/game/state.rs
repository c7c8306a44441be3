//! Game state: roster, seating order, board, and flags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::{BoardDesign, BoardError, Gameboard};
use crate::core::{GameParams, GameRng, Player, PlayerId};

/// A recorded winner: the survivor, or a top-money player at the round
/// limit (ties share the win).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub id: PlayerId,
    pub name: String,
    pub money: i64,
}

/// A running game.
///
/// Owns the board, the roster, and the seating order. Seating order
/// keys form two bands: `[1, maximum_player]` for active players and
/// everything above for retired players in retirement order.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) board: Gameboard,
    pub(crate) players: BTreeMap<PlayerId, Player>,
    pub(crate) player_orders: BTreeMap<u32, PlayerId>,
    pub(crate) params: GameParams,
    pub(crate) current_round: u32,
    pub(crate) game_over: bool,
    pub(crate) winners: Vec<Winner>,
    pub(crate) rng: GameRng,
}

/// Builder for creating a [`Game`].
///
/// ## Example
///
/// ```
/// use monoboard::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .player("Alice")
///     .player("Bob")
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.current_round(), 1);
/// assert!(!game.is_game_over());
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    names: Vec<String>,
    params: GameParams,
    design: BoardDesign,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            params: GameParams::default(),
            design: BoardDesign::classic(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a player.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Seat several players at once.
    #[must_use]
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Replace the default parameters.
    #[must_use]
    pub fn params(mut self, params: GameParams) -> Self {
        self.params = params;
        self
    }

    /// Replace the default board design.
    #[must_use]
    pub fn design(mut self, design: BoardDesign) -> Self {
        self.design = design;
        self
    }

    /// Validate the design and build the game.
    pub fn build(self, seed: u64) -> Result<Game, BoardError> {
        let count = self.names.len();
        assert!(
            (self.params.minimum_player as usize..=self.params.maximum_player as usize)
                .contains(&count),
            "Player count must be {}-{}",
            self.params.minimum_player,
            self.params.maximum_player,
        );

        let board = Gameboard::from_design(&self.design)?;

        let mut players = BTreeMap::new();
        let mut player_orders = BTreeMap::new();
        for (index, name) in self.names.into_iter().enumerate() {
            let id = PlayerId::new(index as u8);
            players.insert(id, Player::new(id, name, board.size()));
            player_orders.insert(index as u32 + 1, id);
        }

        Ok(Game {
            board,
            players,
            player_orders,
            params: self.params,
            current_round: 1,
            game_over: false,
            winners: Vec::new(),
            rng: GameRng::new(seed),
        })
    }
}

impl Game {
    /// The board.
    #[must_use]
    pub fn board(&self) -> &Gameboard {
        &self.board
    }

    /// The game parameters.
    #[must_use]
    pub fn params(&self) -> &GameParams {
        &self.params
    }

    /// Look up a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        self.players.get(&id).expect("unknown player id")
    }

    /// Iterate over all players, retired included.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// The seating order: order index to player, active band first.
    #[must_use]
    pub fn player_orders(&self) -> &BTreeMap<u32, PlayerId> {
        &self.player_orders
    }

    /// IDs of players still in the game.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .values()
            .filter(|p| !p.is_retired)
            .map(|p| p.id)
            .collect()
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Recorded winners. Empty until the game ends.
    #[must_use]
    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_two_player_game() {
        let game = GameBuilder::new().player("Alice").player("Bob").build(42).unwrap();

        assert_eq!(game.players().count(), 2);
        assert_eq!(game.active_players().len(), 2);
        assert_eq!(game.current_round(), 1);
        assert!(!game.is_game_over());
        assert!(game.winners().is_empty());

        // Seating order 1..=n in join order
        assert_eq!(game.player_orders()[&1], PlayerId::new(0));
        assert_eq!(game.player_orders()[&2], PlayerId::new(1));

        let alice = game.player(PlayerId::new(0));
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.location, 1);
        assert_eq!(alice.board_size, game.board().size());
    }

    #[test]
    fn test_builder_players_batch() {
        let game = GameBuilder::new()
            .players(["Alice", "Bob", "Carol"])
            .build(0)
            .unwrap();

        assert_eq!(game.players().count(), 3);
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-6")]
    fn test_single_player_rejected() {
        let _ = GameBuilder::new().player("Alone").build(0);
    }

    #[test]
    fn test_invalid_design_fails_build() {
        let result = GameBuilder::new()
            .player("Alice")
            .player("Bob")
            .design(BoardDesign::new(8))
            .build(0);

        assert!(result.is_err());
    }
}
