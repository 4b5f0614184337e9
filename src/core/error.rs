//! Error types.
//!
//! `GameError` covers precondition violations on the model (player count,
//! board bounds, inactive players). `PersistError` covers saved state that
//! cannot be written or read back. Running out of money is never an error.

use derive_more::{Display, Error};

use super::player::PlayerId;

/// A rejected operation on a game or board. The target is left unmodified.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// Player count outside the allowed range.
    #[display("Must have {min}-{max} players, got {count}")]
    PlayerCount { count: usize, min: usize, max: usize },

    /// Board position outside `1..=size`.
    #[display("Invalid position {position}. Must be between 1 and {size}.")]
    OutOfBounds { position: usize, size: usize },

    /// A square built for one position offered for another slot.
    #[display("Square for position {square_position} cannot be placed at position {position}")]
    MisplacedSquare { position: usize, square_position: u8 },

    /// Turn requested for a player who is not in the game.
    #[display("{player} is not an active player")]
    NotActive { player: PlayerId },

    /// Turn requested after the game ended.
    #[display("The game is over")]
    GameOver,

    /// Rules a game cannot be played with.
    #[display("Invalid rules: {reason}")]
    InvalidRules {
        #[error(not(source))]
        reason: String,
    },
}

/// Failure to save or restore state.
#[derive(Debug, Display, Error)]
pub enum PersistError {
    #[display("Failed to encode saved state: {source}")]
    Encode { source: bincode::Error },

    #[display("Failed to decode saved state: {source}")]
    Decode { source: bincode::Error },

    #[display("I/O error: {source}")]
    Io { source: std::io::Error },

    #[display("Unsupported save format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[display("Corrupt saved state: {reason}")]
    Corrupt {
        #[error(not(source))]
        reason: String,
    },
}

impl PersistError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Self::Corrupt {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}
