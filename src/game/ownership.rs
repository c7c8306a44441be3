//! Ownership transfer and player elimination.

use super::state::{Game, Winner};
use crate::core::PlayerId;

impl Game {
    /// Record the acting player as owner of the square they stand on.
    ///
    /// Only succeeds when the square is ownable and unowned; any other
    /// case is logged and left unchanged. Ownership contention is an
    /// expected outcome, not an error.
    pub fn transfer_ownership(&mut self, id: PlayerId) {
        let player = self.players.get(&id).expect("unknown player id");
        let location = player.location;
        let name = player.name.clone();
        self.board.assign_owner(location, id, &name);
    }

    /// Clear ownership of every property the player holds.
    ///
    /// Used on retirement, before the owned set is wiped.
    pub fn release_all_ownership(&mut self, id: PlayerId) {
        let locations: Vec<u16> = self
            .players
            .get(&id)
            .expect("unknown player id")
            .owned_properties
            .iter()
            .copied()
            .collect();

        for location in locations {
            self.board.clear_owner(location);
        }
    }

    /// Retire a player: release properties, freeze the entity, and
    /// re-sequence the seating order.
    ///
    /// Remaining active players are renumbered contiguously from 1,
    /// preserving relative order; the retiree is appended to the
    /// retirement band (`maximum_player + 1` for the first retirement,
    /// one past the highest key thereafter). Already-retired players
    /// keep their slots. Retiring twice is a logged no-op.
    pub fn retire_player(&mut self, id: PlayerId) {
        if self.players.get(&id).expect("unknown player id").is_retired {
            log::warn!("{} is retired already", self.players[&id].name);
            return;
        }

        self.release_all_ownership(id);
        let player = self.players.get_mut(&id).expect("unknown player id");
        player.retired();
        log::info!("{} is retired", player.name);

        let max_player = u32::from(self.params.maximum_player);
        let max_key = self.player_orders.keys().copied().max().unwrap_or(0);
        let retired_slot = if max_key <= max_player {
            max_player + 1
        } else {
            max_key + 1
        };

        let old_orders = std::mem::take(&mut self.player_orders);
        let mut next_active = 1u32;
        for (key, pid) in old_orders {
            if key > max_player {
                // Retirement band is append-only
                self.player_orders.insert(key, pid);
            } else if pid == id {
                self.player_orders.insert(retired_slot, pid);
            } else {
                self.player_orders.insert(next_active, pid);
                next_active += 1;
            }
        }
    }

    /// End the game if exactly one player is left, recording them as
    /// the winner.
    pub fn check_single_survivor(&mut self) {
        let mut survivors = self.players.values().filter(|p| !p.is_retired);

        let (Some(survivor), None) = (survivors.next(), survivors.next()) else {
            return;
        };

        self.game_over = true;
        self.winners = vec![Winner {
            id: survivor.id,
            name: survivor.name.clone(),
            money: survivor.money,
        }];
        log::info!(
            "game over, {} wins with ${}",
            survivor.name,
            survivor.money
        );
    }
}
