//! Core engine types: players, parameters, RNG, and the decision seam.
//!
//! These are the building blocks the board and turn engine are
//! assembled from; nothing in here knows about squares or rounds.

pub mod decision;
pub mod params;
pub mod player;
pub mod rng;

pub use decision::{AlwaysNo, AlwaysYes, Decision, DecisionProvider, Scripted};
pub use params::GameParams;
pub use player::{DiceRoll, Player, PlayerId, DIE_FACES, JAIL_COUNTDOWN_START, STARTING_MONEY};
pub use rng::{GameRng, GameRngState};
