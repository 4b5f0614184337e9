//! Core engine types: players, RNG, dice, configuration, errors.

pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;

pub use config::RulesConfig;
pub use dice::Dice;
pub use error::{GameError, PersistError};
pub use player::{EscapeAttempt, JailStatus, Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
