//! Decision provider seam.
//!
//! The engine never reads input itself. Whenever a rule needs a yes/no
//! answer from the acting player (buy an unowned property, pay the
//! jailbreak fine), it asks a [`DecisionProvider`] and blocks until a
//! definitive answer comes back. Re-prompting on malformed input is the
//! implementor's job; the engine only ever sees a `bool`.

use std::collections::VecDeque;

/// A yes/no question put to the acting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision<'a> {
    /// Buy the unowned property the player just landed on.
    BuyProperty {
        /// Display name of the property.
        name: &'a str,
        /// Board location of the property.
        location: u16,
        /// Purchase price.
        price: i64,
    },
    /// Pay the fine to leave jail immediately instead of rolling for
    /// doubles.
    PayJailbreak {
        /// The fine.
        price: i64,
    },
}

/// Supplies answers for in-turn decisions.
///
/// Implementations back this with a prompt, an AI policy, or a script.
/// The call is blocking and must return a definitive answer.
pub trait DecisionProvider {
    /// Answer a yes/no decision.
    fn decide(&mut self, decision: Decision<'_>) -> bool;
}

/// Accepts every decision. Matches the interactive default, where an
/// empty reply counts as "yes".
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysYes;

impl DecisionProvider for AlwaysYes {
    fn decide(&mut self, _decision: Decision<'_>) -> bool {
        true
    }
}

/// Declines every decision.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysNo;

impl DecisionProvider for AlwaysNo {
    fn decide(&mut self, _decision: Decision<'_>) -> bool {
        false
    }
}

/// Answers from a fixed queue, falling back to a default once the
/// queue is exhausted. Intended for tests and scripted playouts.
#[derive(Clone, Debug)]
pub struct Scripted {
    answers: VecDeque<bool>,
    default: bool,
}

impl Scripted {
    /// Create a scripted provider from a list of answers.
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            default: true,
        }
    }

    /// Set the answer used after the script runs out.
    #[must_use]
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    /// Number of scripted answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl DecisionProvider for Scripted {
    fn decide(&mut self, _decision: Decision<'_>) -> bool {
        self.answers.pop_front().unwrap_or(self.default)
    }
}
