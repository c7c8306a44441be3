//! Game parameters.
//!
//! All tunable rule values live in one explicit struct passed at game
//! construction. There is no process-wide configuration.

use serde::{Deserialize, Serialize};

/// Tunable rule values for a game.
///
/// Defaults match the classic setup: $1500 starting money on Go,
/// 10% income tax, $150 jailbreak fine, 100-round limit, 2-6 players.
///
/// ## Example
///
/// ```
/// use monoboard::core::GameParams;
///
/// let params = GameParams::default()
///     .with_go_money(200)
///     .with_maximum_rounds(50);
///
/// assert_eq!(params.go_money, 200);
/// assert_eq!(params.jailbreak_price, 150);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameParams {
    /// Shuffle the active seating order at the start of every round.
    pub random_player_orders: bool,
    /// Multiplier applied to chance-card magnitude draws.
    pub chance_multiplier: i64,
    /// Fine paid to leave jail.
    pub jailbreak_price: i64,
    /// Income tax rate applied to the player's current money.
    pub tax_rate: f64,
    /// Bonus credited when passing or landing past Go.
    pub go_money: i64,
    /// The game ends after this many completed rounds.
    pub maximum_rounds: u32,
    /// Minimum number of seated players.
    pub minimum_player: u8,
    /// Maximum number of seated players. Order indices above this value
    /// are reserved for retired players.
    pub maximum_player: u8,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            random_player_orders: false,
            chance_multiplier: 10,
            jailbreak_price: 150,
            tax_rate: 0.1,
            go_money: 1500,
            maximum_rounds: 100,
            minimum_player: 2,
            maximum_player: 6,
        }
    }
}

impl GameParams {
    /// Shuffle seating order every round.
    #[must_use]
    pub fn with_random_player_orders(mut self, random: bool) -> Self {
        self.random_player_orders = random;
        self
    }

    /// Set the chance magnitude multiplier.
    #[must_use]
    pub fn with_chance_multiplier(mut self, multiplier: i64) -> Self {
        self.chance_multiplier = multiplier;
        self
    }

    /// Set the jailbreak fine.
    #[must_use]
    pub fn with_jailbreak_price(mut self, price: i64) -> Self {
        self.jailbreak_price = price;
        self
    }

    /// Set the income tax rate.
    #[must_use]
    pub fn with_tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Set the Go bonus.
    #[must_use]
    pub fn with_go_money(mut self, amount: i64) -> Self {
        self.go_money = amount;
        self
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_maximum_rounds(mut self, rounds: u32) -> Self {
        self.maximum_rounds = rounds;
        self
    }

    /// Set the allowed player-count range.
    #[must_use]
    pub fn with_player_range(mut self, minimum: u8, maximum: u8) -> Self {
        assert!(minimum >= 1, "Must allow at least 1 player");
        assert!(minimum <= maximum, "Minimum player count exceeds maximum");
        self.minimum_player = minimum;
        self.maximum_player = maximum;
        self
    }
}
