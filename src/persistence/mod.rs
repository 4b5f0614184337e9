//! Saving and restoring games and board designs.
//!
//! Both formats are a four byte tag, a format version and a bincode body.
//! A saved game carries everything needed to resume: seats, money,
//! positions, jail counters, ownership, round counters and the exact state
//! of every random stream. Decoded state is checked before it is handed
//! back, so a loaded game always satisfies the same invariants as a built
//! one.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::board::Board;
use crate::core::PersistError;
use crate::game::Game;

/// Version written by this build. Older or newer saves are rejected.
pub const FORMAT_VERSION: u32 = 1;

const GAME_TAG: [u8; 4] = *b"MNPG";
const BOARD_TAG: [u8; 4] = *b"MNPB";

fn encode<T: Serialize>(tag: [u8; 4], value: &T) -> Result<Vec<u8>, PersistError> {
    let mut bytes = Vec::with_capacity(256);
    bytes.extend_from_slice(&tag);
    bincode::serialize_into(&mut bytes, &FORMAT_VERSION).map_err(|source| PersistError::Encode { source })?;
    bincode::serialize_into(&mut bytes, value).map_err(|source| PersistError::Encode { source })?;
    Ok(bytes)
}

fn decode<T: DeserializeOwned>(tag: [u8; 4], mut bytes: &[u8]) -> Result<T, PersistError> {
    let Some(found) = bytes.get(..4) else {
        return Err(PersistError::corrupt("missing header"));
    };
    if found != tag {
        return Err(PersistError::corrupt(format!(
            "expected a {} save",
            if tag == GAME_TAG { "game" } else { "board" }
        )));
    }
    bytes = &bytes[4..];

    let version: u32 = bincode::deserialize_from(&mut bytes).map_err(|source| PersistError::Decode { source })?;
    if version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }

    let value = bincode::deserialize_from(&mut bytes).map_err(|source| PersistError::Decode { source })?;
    if !bytes.is_empty() {
        return Err(PersistError::corrupt(format!("{} trailing bytes", bytes.len())));
    }
    Ok(value)
}

/// Encode a game in progress.
#[instrument(skip_all, fields(round = game.current_round()))]
pub fn save_game(game: &Game) -> Result<Vec<u8>, PersistError> {
    let bytes = encode(GAME_TAG, game)?;
    debug!(len = bytes.len(), "game encoded");
    Ok(bytes)
}

/// Decode a game saved by [`save_game`].
#[instrument(skip_all, fields(len = bytes.len()))]
pub fn load_game(bytes: &[u8]) -> Result<Game, PersistError> {
    let game: Game = decode(GAME_TAG, bytes)?;
    game.validate().map_err(PersistError::corrupt)?;
    debug!(round = game.current_round(), "game decoded");
    Ok(game)
}

/// Encode a board design.
pub fn save_board(board: &Board) -> Result<Vec<u8>, PersistError> {
    encode(BOARD_TAG, board)
}

/// Decode a board saved by [`save_board`].
pub fn load_board(bytes: &[u8]) -> Result<Board, PersistError> {
    let board: Board = decode(BOARD_TAG, bytes)?;
    board.validate().map_err(PersistError::corrupt)?;
    Ok(board)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), PersistError> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(bytes)?;
    out.flush()?;
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>, PersistError> {
    let mut bytes = Vec::new();
    BufReader::new(File::open(path)?).read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Write a game to `path`, replacing any existing file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn save_game_to_path(game: &Game, path: impl AsRef<Path>) -> Result<(), PersistError> {
    write_file(path.as_ref(), &save_game(game)?)
}

#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_game_from_path(path: impl AsRef<Path>) -> Result<Game, PersistError> {
    load_game(&read_file(path.as_ref())?)
}

pub fn save_board_to_path(board: &Board, path: impl AsRef<Path>) -> Result<(), PersistError> {
    write_file(path.as_ref(), &save_board(board)?)
}

pub fn load_board_from_path(path: impl AsRef<Path>) -> Result<Board, PersistError> {
    load_board(&read_file(path.as_ref())?)
}
