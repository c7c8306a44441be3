//! The turn engine: one player's complete turn.

use super::state::Game;
use crate::board::{BehaviorTag, Square};
use crate::core::{Decision, DecisionProvider, Player, PlayerId};
use crate::effects;

impl Game {
    /// Run one complete turn for `id`.
    ///
    /// The caller guarantees the player is not retired; the round loop
    /// skips retired seats.
    ///
    /// Order of operations:
    /// 1. Jailed players run the jailbreak procedure; money at or
    ///    below zero afterwards retires them on the spot, with no
    ///    movement even if dice came back.
    /// 2. Free players roll normally.
    /// 3. No dice means the player stays in jail; the turn ends.
    /// 4. Move by the dice sum. Crossing the board end triggers the Go
    ///    bonus before the location is wrapped back onto the ring.
    /// 5. Resolve the landing square: buy/rent/home for properties,
    ///    jail entry for Go To Jail, the tagged effect otherwise. Rent
    ///    or an effect that empties the wallet retires the player
    ///    immediately, ending the turn.
    pub fn take_turn(&mut self, id: PlayerId, decider: &mut dyn DecisionProvider) {
        assert!(
            !self.players.get(&id).expect("unknown player id").is_retired,
            "retired players take no turns"
        );

        let dice = if self.players[&id].is_jailed {
            let price = self.params.jailbreak_price;
            let rng = &mut self.rng;
            let player = self.players.get_mut(&id).expect("unknown player id");
            let dice = player.jailbreak(price, rng, decider);
            if player.money <= 0 {
                self.retire_player(id);
                self.check_single_survivor();
                return;
            }
            dice
        } else {
            Some(Player::roll_dice(&mut self.rng))
        };

        // Still jailed, no doubles: no movement this turn.
        let Some(dice) = dice else {
            return;
        };
        log::debug!("{} rolled {:?}", self.players[&id].name, dice);

        let board_size = self.board.size();
        {
            let player = self.players.get_mut(&id).expect("unknown player id");
            player.move_by(dice.sum());
            if player.location > board_size {
                // Passing Go pays out before the wraparound.
                effects::go(player, &self.params);
                player.adjust_location();
            }
        }

        let location = self.players[&id].location;
        let square = self.board.square(location).clone();
        log::debug!(
            "{} landed on {} (location {})",
            self.players[&id].name,
            square.name(),
            location
        );

        match square {
            Square::Property {
                name, price, rent, owner, ..
            } => self.resolve_property_landing(id, location, &name, price, rent, owner, decider),
            Square::Function {
                tag: Some(BehaviorTag::GoToJail),
                ..
            } => {
                let jail_location = self
                    .board
                    .jail_location()
                    .expect("board with Go To Jail has a jail square");
                let player = self.players.get_mut(&id).expect("unknown player id");
                effects::go_to_jail(player, jail_location);
            }
            Square::Function {
                tag: Some(BehaviorTag::Go),
                ..
            } => {
                // Bonus is only paid on the wraparound, not on landing.
            }
            Square::Function { tag: Some(tag), .. } => {
                let params = self.params.clone();
                let jail_location = self.board.jail_location();
                let rng = &mut self.rng;
                let player = self.players.get_mut(&id).expect("unknown player id");
                effects::apply(tag, player, &params, rng, decider, jail_location);
                if player.money <= 0 {
                    self.retire_player(id);
                    self.check_single_survivor();
                }
            }
            Square::Function { tag: None, .. } => {
                // Unrecognized behavior from the design file: the
                // square occupies its location but does nothing.
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve_property_landing(
        &mut self,
        id: PlayerId,
        location: u16,
        name: &str,
        price: i64,
        rent: i64,
        owner: Option<PlayerId>,
        decider: &mut dyn DecisionProvider,
    ) {
        match owner {
            None => {
                if self.players[&id].money > price {
                    let buying = decider.decide(Decision::BuyProperty {
                        name,
                        location,
                        price,
                    });
                    if buying {
                        let player = self.players.get_mut(&id).expect("unknown player id");
                        player.buy_property(location, price);
                        log::info!("{} bought {} for ${}", player.name, name, price);
                        self.transfer_ownership(id);
                    }
                }
            }
            Some(owner_id) if owner_id != id => {
                let charged = self.players[&id].money.min(rent);
                self.players
                    .get_mut(&owner_id)
                    .expect("owner is a registered player")
                    .money += charged;
                let player = self.players.get_mut(&id).expect("unknown player id");
                player.money -= charged;
                log::info!(
                    "{} pays ${} rent on {}",
                    player.name,
                    charged,
                    name
                );
                if player.money <= 0 {
                    self.retire_player(id);
                    self.check_single_survivor();
                }
            }
            Some(_) => {
                // The player's own property: nothing to pay.
                log::debug!("{} is home on {}", self.players[&id].name, name);
            }
        }
    }
}
