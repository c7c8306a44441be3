//! The round loop: sequencing active players and ending the game.

use super::state::{Game, Winner};
use crate::core::{DecisionProvider, PlayerId};

impl Game {
    /// Play one round: a full pass over the active seating band.
    ///
    /// Seats are visited in ascending order, or shuffled once per round
    /// when `random_player_orders` is set. Retired seats are skipped
    /// but stay in the structure. The pass stops early when the game
    /// ends mid-round. Afterwards the round counter advances.
    pub fn play_one_round(&mut self, decider: &mut dyn DecisionProvider) {
        log::info!("round {}", self.current_round);

        let max_player = u32::from(self.params.maximum_player);
        // Snapshot the active band; retirements re-sequence the live
        // order mid-round without affecting this pass.
        let mut seats: Vec<PlayerId> = self
            .player_orders
            .iter()
            .filter(|(key, _)| **key <= max_player)
            .map(|(_, id)| *id)
            .collect();
        if self.params.random_player_orders {
            self.rng.shuffle(&mut seats);
        }

        for id in seats {
            if self.game_over {
                break;
            }
            if self.players[&id].is_retired {
                continue;
            }
            self.take_turn(id, decider);
        }

        self.current_round += 1;
    }

    /// Play rounds until the game ends: a single survivor, or the
    /// round limit with the richest surviving players declared winners.
    pub fn play_to_completion(&mut self, decider: &mut dyn DecisionProvider) {
        while !self.game_over {
            self.play_one_round(decider);
            if !self.game_over && self.current_round > self.params.maximum_rounds {
                self.finish_by_round_limit();
            }
        }
    }

    /// End the game at the round limit. Every surviving player with
    /// the top money total shares the win.
    fn finish_by_round_limit(&mut self) {
        let top = self
            .players
            .values()
            .filter(|p| !p.is_retired)
            .map(|p| p.money)
            .max();

        if let Some(top) = top {
            self.winners = self
                .players
                .values()
                .filter(|p| !p.is_retired && p.money == top)
                .map(|p| Winner {
                    id: p.id,
                    name: p.name.clone(),
                    money: p.money,
                })
                .collect();
        }

        self.game_over = true;
        log::info!("game over after {} rounds", self.params.maximum_rounds);
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{AlwaysNo, AlwaysYes, GameParams, PlayerId};
    use crate::game::GameBuilder;

    #[test]
    fn test_round_counter_advances() {
        let mut game = GameBuilder::new().player("Alice").player("Bob").build(42).unwrap();

        assert_eq!(game.current_round(), 1);
        game.play_one_round(&mut AlwaysNo);
        assert_eq!(game.current_round(), 2);
    }

    #[test]
    fn test_retired_players_are_skipped() {
        let mut game = GameBuilder::new()
            .players(["Alice", "Bob", "Carol"])
            .params(GameParams::default().with_player_range(2, 3))
            .build(42)
            .unwrap();

        game.retire_player(PlayerId::new(0));
        let frozen = game.player(PlayerId::new(0)).clone();

        game.play_one_round(&mut AlwaysNo);

        assert_eq!(game.player(PlayerId::new(0)), &frozen);
    }

    #[test]
    fn test_round_limit_declares_richest_winner() {
        let mut game = GameBuilder::new()
            .player("Alice")
            .player("Bob")
            .params(GameParams::default().with_maximum_rounds(3))
            .build(42)
            .unwrap();

        game.play_to_completion(&mut AlwaysNo);

        assert!(game.is_game_over());
        assert!(game.current_round() > 3 || !game.winners().is_empty());
        assert!(!game.winners().is_empty());

        let top = game
            .players()
            .filter(|p| !p.is_retired)
            .map(|p| p.money)
            .max()
            .unwrap();
        for winner in game.winners() {
            assert_eq!(winner.money, top);
        }
    }

    #[test]
    fn test_ties_share_the_win() {
        let mut game = GameBuilder::new()
            .player("Alice")
            .player("Bob")
            .params(GameParams::default().with_maximum_rounds(0))
            .build(42)
            .unwrap();

        // Round limit 0: the first round completes and both players
        // still hold identical money unless rent changed hands.
        game.players.get_mut(&PlayerId::new(0)).unwrap().money = 1000;
        game.players.get_mut(&PlayerId::new(1)).unwrap().money = 1000;

        // Finish without playing: force the limit check directly.
        game.finish_by_round_limit();

        assert_eq!(game.winners().len(), 2);
    }

    #[test]
    fn test_game_terminates() {
        let mut game = GameBuilder::new()
            .players(["Alice", "Bob", "Carol", "Dave"])
            .params(GameParams::default().with_maximum_rounds(200))
            .build(7)
            .unwrap();

        game.play_to_completion(&mut AlwaysYes);

        assert!(game.is_game_over());
        assert!(!game.winners().is_empty());
    }

    #[test]
    fn test_shuffled_orders_still_complete() {
        let mut game = GameBuilder::new()
            .players(["Alice", "Bob", "Carol"])
            .params(
                GameParams::default()
                    .with_player_range(2, 3)
                    .with_random_player_orders(true)
                    .with_maximum_rounds(50),
            )
            .build(99)
            .unwrap();

        game.play_to_completion(&mut AlwaysYes);
        assert!(game.is_game_over());
    }

    #[test]
    fn test_deterministic_playout() {
        let run = |seed| {
            let mut game = GameBuilder::new()
                .player("Alice")
                .player("Bob")
                .params(GameParams::default().with_maximum_rounds(30))
                .build(seed)
                .unwrap();
            game.play_to_completion(&mut AlwaysYes);
            (
                game.player(PlayerId::new(0)).money,
                game.player(PlayerId::new(1)).money,
                game.winners().to_vec(),
            )
        };

        assert_eq!(run(42), run(42));
    }
}
