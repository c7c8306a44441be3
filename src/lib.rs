//! # monoboard
//!
//! A turn-based, Monopoly-style board game engine.
//!
//! ## Design Principles
//!
//! 1. **Explicit configuration**: All rule values live in [`GameParams`]
//!    passed at construction. No process-wide state.
//!
//! 2. **Closed behaviors**: Square behaviors are a tagged enumeration
//!    dispatched through one exhaustive match, validated at load time.
//!    Unknown tags in a board design load as inert squares.
//!
//! 3. **Deterministic**: All randomness flows through a seeded RNG
//!    whose position is captured in save files; a restored game
//!    continues the exact playout it left.
//!
//! 4. **Thin edges**: Prompting, rendering, and AI live behind the
//!    [`DecisionProvider`] seam and the read-only status snapshots.
//!    The engine itself never blocks on anything but that trait.
//!
//! ## Modules
//!
//! - `core`: players, parameters, RNG, the decision seam
//! - `board`: design files, validation, squares, the gameboard
//! - `effects`: the six square-behavior handlers
//! - `game`: game state, ownership, the turn engine, the round loop
//! - `persist`: JSON save-file round-tripping
//!
//! ## Example
//!
//! ```
//! use monoboard::core::AlwaysYes;
//! use monoboard::game::GameBuilder;
//!
//! let mut game = GameBuilder::new()
//!     .player("Alice")
//!     .player("Bob")
//!     .build(42)
//!     .unwrap();
//!
//! game.play_to_completion(&mut AlwaysYes);
//! assert!(game.is_game_over());
//! ```

pub mod board;
pub mod core;
pub mod effects;
pub mod game;
pub mod persist;

// Re-export commonly used types
pub use crate::core::{
    AlwaysNo, AlwaysYes, Decision, DecisionProvider, DiceRoll, GameParams, GameRng, GameRngState,
    Player, PlayerId, Scripted,
};

pub use crate::board::{
    BehaviorTag, BoardDesign, BoardError, DesignIssue, FunctionDesign, Gameboard, PropertyDesign,
    PropertyUpdate, Square,
};

pub use crate::game::{Game, GameBuilder, PlayerStatus, SquareStatus, Winner};

pub use crate::persist::{PersistError, SaveState};
