//! Square effect handlers.
//!
//! Each function square carries a [`BehaviorTag`]; the turn engine
//! dispatches through [`apply`], whose exhaustive match is the
//! tag-to-handler table. Handlers mutate only the acting player; board
//! and roster changes (ownership, retirement) stay in the game module.

use crate::board::BehaviorTag;
use crate::core::{DecisionProvider, GameParams, GameRng, Player};

/// Upper bound (exclusive) of the chance gain magnitude draw.
const CHANCE_GAIN_RANGE: i64 = 20;
/// Upper bound (exclusive) of the chance loss magnitude draw.
const CHANCE_LOSS_RANGE: i64 = 30;

/// Credit the Go bonus.
pub fn go(player: &mut Player, params: &GameParams) {
    player.money += params.go_money;
    log::debug!("{} collects ${} for passing Go", player.name, params.go_money);
}

/// Debit income tax: the player's money times the tax rate, rounded
/// down to a multiple of 10.
pub fn income_tax(player: &mut Player, params: &GameParams) {
    let tax = ((player.money as f64 * params.tax_rate / 10.0).floor() as i64) * 10;
    player.money -= tax;
    log::debug!("{} is charged ${} income tax", player.name, tax);
}

/// Random gain or loss.
///
/// Draw order is fixed for seeded reproducibility: the gain/loss coin
/// first, then the magnitude.
pub fn chance(player: &mut Player, params: &GameParams, rng: &mut GameRng) {
    let is_gain = rng.gen_bool(0.5);
    if is_gain {
        let gain = params.chance_multiplier * rng.gen_range(0..CHANCE_GAIN_RANGE);
        player.money += gain;
        log::debug!("{} draws a chance and gains ${}", player.name, gain);
    } else {
        let loss = params.chance_multiplier * rng.gen_range(0..CHANCE_LOSS_RANGE);
        player.money -= loss;
        log::debug!("{} draws a chance and loses ${}", player.name, loss);
    }
}

/// No effect. Reserved for future pot mechanics.
pub fn free_parking(_player: &mut Player, _params: &GameParams) {}

/// No effect when visiting; a jailed player runs the jailbreak
/// procedure with the configured fine.
pub fn just_visiting_or_in_jail(
    player: &mut Player,
    params: &GameParams,
    rng: &mut GameRng,
    decider: &mut dyn DecisionProvider,
) {
    if player.is_jailed {
        let _ = player.jailbreak(params.jailbreak_price, rng, decider);
    }
}

/// Send the player to jail. Idempotent: a jailed player stays put.
pub fn go_to_jail(player: &mut Player, jail_location: u16) {
    if !player.is_jailed {
        player.jailed(jail_location);
        log::info!("{} is sent to jail", player.name);
    }
}

/// Dispatch a behavior tag to its handler.
///
/// `jail_location` is only consulted for [`BehaviorTag::GoToJail`]; a
/// board with that square always has one.
pub fn apply(
    tag: BehaviorTag,
    player: &mut Player,
    params: &GameParams,
    rng: &mut GameRng,
    decider: &mut dyn DecisionProvider,
    jail_location: Option<u16>,
) {
    match tag {
        BehaviorTag::Go => go(player, params),
        BehaviorTag::IncomeTax => income_tax(player, params),
        BehaviorTag::Chance => chance(player, params, rng),
        BehaviorTag::FreeParking => free_parking(player, params),
        BehaviorTag::JustVisitingOrInJail => just_visiting_or_in_jail(player, params, rng, decider),
        BehaviorTag::GoToJail => {
            if let Some(jail_location) = jail_location {
                go_to_jail(player, jail_location);
            } else {
                log::warn!("Go To Jail fired on a board with no jail square");
            }
        }
    }
}
