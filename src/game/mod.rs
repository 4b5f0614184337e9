//! Game orchestration.
//!
//! A [`Game`] owns the board, two dice, every seated player and the round
//! counters. Turns are resolved in `turn`; construction lives in `builder`;
//! the final ranking in `result`.
//!
//! ## Playing
//!
//! - [`Game::play`] runs rounds until the game is over and announces the
//!   result.
//! - [`Game::play_turn`] advances one turn at a time for interactive
//!   front ends; it returns `None` once the game is over.
//! - [`Game::take_turn`] resolves one player's turn with no round
//!   bookkeeping or elimination.

mod builder;
mod result;
mod turn;

pub use builder::GameBuilder;
pub use result::{GameResult, Standing};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use crate::board::Board;
use crate::core::config::{BOARD_SIZE, JAIL_POSITION, MAX_PLAYERS, MIN_PLAYERS};
use crate::core::{Dice, GameError, GameRng, JailStatus, Player, PlayerId, PlayerMap, RulesConfig};
use crate::squares::Square;

/// Complete state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    rules: RulesConfig,
    /// Every seat, eliminated or not.
    players: PlayerMap<Player>,
    /// Seats still playing, in turn order.
    active: SmallVec<[PlayerId; MAX_PLAYERS]>,
    board: Board,
    dice: [Dice; 2],
    chance_rng: GameRng,
    current_player_index: usize,
    current_round: u32,
    /// Set between a round's first turn and its last.
    round_in_progress: bool,
}

impl Game {
    /// New game on the standard board with default rules and unseeded dice.
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GameBuilder::new().players(names).build()
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board, for customization between turns.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace a board slot. See [`Board::set_square`].
    pub fn set_square(&mut self, position: usize, square: impl Into<Square>) -> Result<Square, GameError> {
        self.board.set_square(position, square)
    }

    /// Any seated player, including eliminated ones.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.contains(player).then(|| &self.players[player])
    }

    /// Mutable access to a seated player, for setting up positions.
    pub fn player_mut(&mut self, player: PlayerId) -> Option<&mut Player> {
        if self.players.contains(player) {
            Some(&mut self.players[player])
        } else {
            None
        }
    }

    /// Seat id of the first player with this name.
    #[must_use]
    pub fn find_player(&self, name: &str) -> Option<PlayerId> {
        self.players.iter().find(|(_, p)| p.name() == name).map(|(id, _)| id)
    }

    /// Players still in the game, in turn order.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.active.contains(&player)
    }

    /// Number of seats, eliminated players included.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Whether some players have moved in the current round and others
    /// have not.
    #[must_use]
    pub fn round_in_progress(&self) -> bool {
        self.round_in_progress
    }

    /// Index into [`Game::active_players`] of whoever moves next.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.active.get(self.current_player_index).copied()
    }

    /// The player after the current one, wrapping around.
    #[must_use]
    pub fn next_player(&self) -> Option<PlayerId> {
        if self.active.is_empty() {
            return None;
        }
        let next = (self.current_player_index + 1) % self.active.len();
        self.active.get(next).copied()
    }

    /// Where Go to Jail sends players on this board.
    #[must_use]
    pub fn jail_position(&self) -> u8 {
        self.board.jail_position().unwrap_or(JAIL_POSITION)
    }

    /// The round cap has been reached or at most one player is left.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.current_round == self.rules.max_rounds || self.active.len() <= 1
    }

    /// Round, current player and every board slot with its owner.
    #[must_use]
    pub fn status_report(&self) -> String {
        let current = self
            .current_player()
            .map_or("None", |id| self.players[id].name());
        let mut out = format!(
            "Current Round: {}\nCurrent Player: {current}\nBoard Status:\n",
            self.current_round
        );
        for square in self.board.iter() {
            let line = match square.as_property() {
                Some(_) => {
                    let owner = square.owner().map_or("None", |id| self.players[id].name());
                    format!("{}. {} (Owner: {owner})\n", square.position(), square.name())
                }
                None => format!("{}. {}\n", square.position(), square.name()),
            };
            out.push_str(&line);
        }
        out
    }

    /// One status line per active player.
    #[must_use]
    pub fn players_report(&self) -> String {
        self.active
            .iter()
            .map(|&id| self.players[id].status() + "\n")
            .collect()
    }

    /// Check cross-references that a decoded game could have broken.
    pub(crate) fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        self.rules.validate()?;
        for (i, die) in self.dice.iter().enumerate() {
            die.validate().map_err(|reason| format!("die {}: {reason}", i + 1))?;
        }

        let seats = self.players.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&seats) {
            return Err(format!("{seats} seats recorded"));
        }
        for (id, player) in self.players.iter() {
            if !(1..=BOARD_SIZE).contains(&player.position()) {
                return Err(format!("{id} is off the board at {}", player.position()));
            }
            if let JailStatus::Jailed { attempts } = player.jail_status() {
                if attempts >= self.rules.jail_attempts {
                    return Err(format!(
                        "{id} has {attempts} jail attempts, release is at {}",
                        self.rules.jail_attempts
                    ));
                }
            }
        }
        for (i, id) in self.active.iter().enumerate() {
            if !self.players.contains(*id) {
                return Err(format!("active {id} has no seat"));
            }
            if self.active[..i].contains(id) {
                return Err(format!("{id} is active twice"));
            }
        }
        for square in self.board.iter() {
            if let Some(owner) = square.owner() {
                if !self.players.contains(owner) {
                    return Err(format!("{} is owned by unknown {owner}", square.name()));
                }
            }
        }
        if self.current_round > self.rules.max_rounds {
            return Err(format!(
                "round {} is past the cap of {}",
                self.current_round, self.rules.max_rounds
            ));
        }
        if !self.round_in_progress && self.current_player_index != 0 {
            return Err("turn index set between rounds".to_string());
        }
        if !self.active.is_empty() && self.current_player_index >= self.active.len() {
            return Err(format!(
                "current player index {} with {} active players",
                self.current_player_index,
                self.active.len()
            ));
        }
        Ok(())
    }
}
