//! # rust-monopoly
//!
//! A compact Monopoly engine: 2 to 6 players race around a 20 square board,
//! buying property, paying rent and tax, and dodging jail until one player
//! is left or the round cap is reached.
//!
//! ## Design Principles
//!
//! 1. **The engine never asks a human directly**: every yes/no choice goes
//!    through a [`DecisionSource`], and every announcement through a
//!    [`Narrator`]. Front ends plug in at those two seams.
//!
//! 2. **Reproducible**: dice and chance draws come from seeded streams
//!    whose position is saved with the game, so a restored game rolls
//!    exactly what the uninterrupted game would have.
//!
//! 3. **Bankruptcy is state, not failure**: money may go negative; the
//!    game loop retires bankrupt players between turns.
//!
//! ## Modules
//!
//! - `core`: players, jail state, dice, RNG, rules configuration, errors
//! - `squares`: the square variants and their landing effects
//! - `board`: the 20 slot ring and board customization
//! - `decisions`: the yes/no decision seam
//! - `events`: game events and narration sinks
//! - `game`: turn resolution, the play loop and the final result
//! - `persistence`: saving and restoring games and boards

pub mod board;
pub mod core;
pub mod decisions;
pub mod events;
pub mod game;
pub mod persistence;
pub mod squares;

// Re-export commonly used types
pub use crate::core::{
    Dice, EscapeAttempt, GameError, GameRng, GameRngState, JailStatus, PersistError, Player,
    PlayerId, PlayerMap, RulesConfig,
};

pub use crate::board::Board;

pub use crate::squares::{
    ChanceSquare, FreeParkingSquare, GoSquare, GoToJailSquare, IncomeTaxSquare, JailSquare,
    PropertySquare, Square, SquareEffect, SquareKind, TurnContext,
};

pub use crate::decisions::{AlwaysAccept, AlwaysDecline, Decision, DecisionSource, Scripted};

pub use crate::events::{EventLog, GameEvent, Narrator, TracingNarrator};

pub use crate::game::{Game, GameBuilder, GameResult, Standing};

pub use crate::persistence::{
    load_board, load_board_from_path, load_game, load_game_from_path, save_board,
    save_board_to_path, save_game, save_game_to_path, FORMAT_VERSION,
};
