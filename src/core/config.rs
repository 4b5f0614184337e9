//! Rules configuration.
//!
//! The defaults are the house rules of the 20-square variant. Games built
//! with `RulesConfig::default()` play exactly those rules; the `with_*`
//! methods exist for simulations and tests that want shorter or harsher
//! games.

use serde::{Deserialize, Serialize};

/// Number of squares on the board.
pub const BOARD_SIZE: u8 = 20;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can start with.
pub const MAX_PLAYERS: usize = 6;

/// Cash every player starts with.
pub const STARTING_MONEY: i64 = 1500;

/// Salary for landing on or passing Go.
pub const GO_SALARY: i64 = 1500;

/// Fine for leaving jail without doubles.
pub const JAIL_FINE: i64 = 150;

/// Escape attempt on which a jailed player is released regardless of dice.
pub const JAIL_ATTEMPTS: u8 = 3;

/// Round on which the game ends.
pub const MAX_ROUNDS: u32 = 100;

/// Faces on each die.
pub const DIE_FACES: u8 = 4;

/// Largest die a game accepts, so two dice always sum within a `u8`.
pub const MAX_DIE_FACES: u8 = 127;

/// Position of the jail on the standard board.
pub const JAIL_POSITION: u8 = 6;

/// Rules parameters for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Cash each player starts with.
    pub starting_money: i64,

    /// Paid on landing on Go and on passing it.
    pub go_salary: i64,

    /// Paid to leave jail, voluntarily or on the final attempt.
    pub jail_fine: i64,

    /// Escape attempt that forces release (with the fine).
    pub jail_attempts: u8,

    /// Round cap. The game ends when the round counter reaches it.
    pub max_rounds: u32,

    /// Faces on each die (rolls are uniform in `1..=die_faces`).
    pub die_faces: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            go_salary: GO_SALARY,
            jail_fine: JAIL_FINE,
            jail_attempts: JAIL_ATTEMPTS,
            max_rounds: MAX_ROUNDS,
            die_faces: DIE_FACES,
        }
    }
}

impl RulesConfig {
    /// Set the starting cash.
    pub fn with_starting_money(mut self, money: i64) -> Self {
        self.starting_money = money;
        self
    }

    /// Set the Go salary.
    pub fn with_go_salary(mut self, salary: i64) -> Self {
        self.go_salary = salary;
        self
    }

    /// Set the jail fine.
    pub fn with_jail_fine(mut self, fine: i64) -> Self {
        self.jail_fine = fine;
        self
    }

    /// Set the round cap.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Check the fields a game cannot be played with.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_DIE_FACES).contains(&self.die_faces) {
            return Err(format!(
                "die_faces must be between 1 and {MAX_DIE_FACES}, got {}",
                self.die_faces
            ));
        }
        if self.jail_attempts == 0 {
            return Err("jail_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}
