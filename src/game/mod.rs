//! The game: state, ownership and elimination, the turn engine, and
//! the round loop.

pub mod ownership;
pub mod report;
pub mod round;
pub mod state;
pub mod turn;

pub use report::{PlayerStatus, SquareStatus};
pub use state::{Game, GameBuilder, Winner};
