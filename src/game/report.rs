//! Read-only state snapshots for external display.
//!
//! The engine formats nothing; callers render these however they like.

use serde::{Deserialize, Serialize};

use super::state::Game;
use crate::board::Square;
use crate::core::PlayerId;

/// Snapshot of one player, in seating order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub id: PlayerId,
    pub name: String,
    /// Seating-order key. `None` when the order is shuffled each round
    /// and therefore meaningless to display.
    pub order: Option<u32>,
    pub location: u16,
    pub money: i64,
    pub owned_properties: Vec<u16>,
    pub is_jailed: bool,
    /// Remaining jailbreak attempts, present only while jailed.
    pub rounds_to_stay_in_jail: Option<u8>,
    pub is_retired: bool,
}

/// Snapshot of one square, in location order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareStatus {
    pub location: u16,
    pub name: String,
    pub is_ownable: bool,
    pub price: Option<i64>,
    pub rent: Option<i64>,
    pub owner: Option<PlayerId>,
    pub owner_name: Option<String>,
    /// Non-retired players currently standing here.
    pub players_on_square: Vec<PlayerId>,
}

impl Game {
    /// Player snapshots, walking the seating order (active band first,
    /// then the retirement band).
    #[must_use]
    pub fn player_statuses(&self) -> Vec<PlayerStatus> {
        self.player_orders
            .iter()
            .map(|(order, id)| {
                let player = &self.players[id];
                PlayerStatus {
                    id: player.id,
                    name: player.name.clone(),
                    order: (!self.params.random_player_orders).then_some(*order),
                    location: player.location,
                    money: player.money,
                    owned_properties: player.owned_properties.iter().copied().collect(),
                    is_jailed: player.is_jailed,
                    rounds_to_stay_in_jail: player
                        .is_jailed
                        .then_some(player.jailed_rounds_count_down),
                    is_retired: player.is_retired,
                }
            })
            .collect()
    }

    /// Square snapshots in location order, with player positions.
    #[must_use]
    pub fn square_statuses(&self) -> Vec<SquareStatus> {
        self.board
            .squares()
            .map(|square| {
                let location = square.location();
                let players_on_square = self
                    .players
                    .values()
                    .filter(|p| !p.is_retired && p.location == location)
                    .map(|p| p.id)
                    .collect();

                match square {
                    Square::Property {
                        name,
                        price,
                        rent,
                        owner,
                        owner_name,
                        ..
                    } => SquareStatus {
                        location,
                        name: name.clone(),
                        is_ownable: true,
                        price: Some(*price),
                        rent: Some(*rent),
                        owner: *owner,
                        owner_name: owner.map(|_| owner_name.clone()),
                        players_on_square,
                    },
                    Square::Function { name, .. } => SquareStatus {
                        location,
                        name: name.clone(),
                        is_ownable: false,
                        price: None,
                        rent: None,
                        owner: None,
                        owner_name: None,
                        players_on_square,
                    },
                }
            })
            .collect()
    }
}
