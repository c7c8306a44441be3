//! Squares and the closed set of square behaviors.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Behavior of a function square.
///
/// This is a closed set: board designs name behaviors by string, and
/// anything outside this enumeration loads as a square with no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorTag {
    /// Credit the Go bonus.
    Go,
    /// Debit income tax, rounded down to a multiple of 10.
    IncomeTax,
    /// No effect when visiting; runs the jailbreak procedure for a
    /// jailed player.
    JustVisitingOrInJail,
    /// Random gain or loss.
    Chance,
    /// No effect.
    FreeParking,
    /// Send the player to jail.
    GoToJail,
}

impl BehaviorTag {
    /// All tags, in board-design order.
    pub const ALL: [BehaviorTag; 6] = [
        BehaviorTag::Go,
        BehaviorTag::IncomeTax,
        BehaviorTag::JustVisitingOrInJail,
        BehaviorTag::Chance,
        BehaviorTag::FreeParking,
        BehaviorTag::GoToJail,
    ];

    /// Parse a design-file behavior name. Case-insensitive.
    ///
    /// Returns `None` for unrecognized names; the loader logs these and
    /// keeps the square as a no-effect placeholder.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "go" => Some(BehaviorTag::Go),
            "income tax" => Some(BehaviorTag::IncomeTax),
            "just visiting / in jail" => Some(BehaviorTag::JustVisitingOrInJail),
            "chance" => Some(BehaviorTag::Chance),
            "free parking" => Some(BehaviorTag::FreeParking),
            "go to jail" => Some(BehaviorTag::GoToJail),
            _ => None,
        }
    }

    /// Canonical design-file name for this tag.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BehaviorTag::Go => "Go",
            BehaviorTag::IncomeTax => "Income Tax",
            BehaviorTag::JustVisitingOrInJail => "Just Visiting / In Jail",
            BehaviorTag::Chance => "Chance",
            BehaviorTag::FreeParking => "Free Parking",
            BehaviorTag::GoToJail => "Go To Jail",
        }
    }
}

impl std::fmt::Display for BehaviorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One square on the board ring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Square {
    /// An ownable property.
    Property {
        /// 1-indexed board position.
        location: u16,
        /// Display name.
        name: String,
        /// Purchase price.
        price: i64,
        /// Rent charged to other players landing here.
        rent: i64,
        /// Current owner, `None` until bought.
        owner: Option<PlayerId>,
        /// Owner display name, cached for reporting. Empty when unowned.
        owner_name: String,
    },
    /// A fixed-behavior square.
    Function {
        /// 1-indexed board position.
        location: u16,
        /// Display name (normally the behavior name).
        name: String,
        /// Behavior, or `None` when the design named an unknown one.
        tag: Option<BehaviorTag>,
    },
}

impl Square {
    /// Board position.
    #[must_use]
    pub fn location(&self) -> u16 {
        match self {
            Square::Property { location, .. } | Square::Function { location, .. } => *location,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Square::Property { name, .. } | Square::Function { name, .. } => name,
        }
    }

    /// Whether the square can be bought.
    #[must_use]
    pub fn is_ownable(&self) -> bool {
        matches!(self, Square::Property { .. })
    }

    /// Current owner, if this is an owned property.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Square::Property { owner, .. } => *owner,
            Square::Function { .. } => None,
        }
    }

    /// Behavior tag, if this is a function square with a known one.
    #[must_use]
    pub fn tag(&self) -> Option<BehaviorTag> {
        match self {
            Square::Function { tag, .. } => *tag,
            Square::Property { .. } => None,
        }
    }
}
