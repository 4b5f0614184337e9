//! Players and per-seat storage.
//!
//! ## PlayerId
//!
//! Seat identifier, stable for the whole game. Eliminated players keep their
//! id; property ownership refers to players only through it.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Cash, token position and the jail state machine:
//!
//! ```text
//! Free --send_to_jail--> Jailed(0)
//! Jailed(n) --non-double roll, n+1 < attempts--> Jailed(n+1)
//! Jailed(n) --doubles | final attempt (fine) | paid fine--> Free
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::{RulesConfig, BOARD_SIZE};

/// Seat identifier for up to 255 players.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_monopoly::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether a player id refers to a seat in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Jail state of a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailStatus {
    /// Moving normally.
    #[default]
    Free,
    /// In jail, with the number of failed escape attempts so far.
    Jailed { attempts: u8 },
}

/// Outcome of one escape roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeAttempt {
    /// Rolled doubles; released without a fine.
    Doubles,
    /// Reached the final attempt; released after paying the fine.
    ServedTime { fine: i64 },
    /// Still jailed after this many attempts.
    Stayed { attempts: u8 },
}

impl EscapeAttempt {
    /// Whether the player left jail.
    #[must_use]
    pub fn is_released(self) -> bool {
        !matches!(self, EscapeAttempt::Stayed { .. })
    }
}

/// Mutable per-player state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    money: i64,
    position: u8,
    jail: JailStatus,
}

impl Player {
    /// Create a player on Go, out of jail.
    pub fn new(name: impl Into<String>, starting_money: i64) -> Self {
        Self {
            name: name.into(),
            money: starting_money,
            position: 1,
            jail: JailStatus::Free,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current cash. Negative means bankrupt.
    #[must_use]
    pub fn money(&self) -> i64 {
        self.money
    }

    /// Current board position (1-based).
    #[must_use]
    pub fn position(&self) -> u8 {
        self.position
    }

    #[must_use]
    pub fn jail_status(&self) -> JailStatus {
        self.jail
    }

    #[must_use]
    pub fn is_in_jail(&self) -> bool {
        matches!(self.jail, JailStatus::Jailed { .. })
    }

    /// Failed escape attempts in the current stay; 0 when free.
    #[must_use]
    pub fn turns_in_jail(&self) -> u8 {
        match self.jail {
            JailStatus::Jailed { attempts } => attempts,
            JailStatus::Free => 0,
        }
    }

    #[must_use]
    pub fn is_bankrupt(&self) -> bool {
        self.money < 0
    }

    pub fn add_money(&mut self, amount: i64) {
        self.money += amount;
    }

    /// Debit without any floor; the balance may go negative.
    pub fn reduce_money(&mut self, amount: i64) {
        self.money -= amount;
    }

    /// Move the token. `position` must be on the board (`1..=20`).
    pub fn set_position(&mut self, position: u8) {
        debug_assert!(
            (1..=BOARD_SIZE).contains(&position),
            "position {position} is off the board"
        );
        self.position = position;
    }

    /// Enter jail with a fresh attempt counter.
    pub fn go_to_jail(&mut self) {
        self.jail = JailStatus::Jailed { attempts: 0 };
    }

    /// Make one escape roll.
    ///
    /// The attempt counter is incremented first. Doubles release the player
    /// for free; reaching `rules.jail_attempts` releases them with the fine
    /// charged even if it overdraws. Calling this while free returns
    /// `Stayed { attempts: 0 }` and changes nothing.
    pub fn try_to_get_out_of_jail(&mut self, die1: u8, die2: u8, rules: &RulesConfig) -> EscapeAttempt {
        let JailStatus::Jailed { attempts } = self.jail else {
            return EscapeAttempt::Stayed { attempts: 0 };
        };

        let attempts = attempts.saturating_add(1);
        if die1 == die2 || attempts >= rules.jail_attempts {
            self.jail = JailStatus::Free;
            if attempts >= rules.jail_attempts {
                self.reduce_money(rules.jail_fine);
                return EscapeAttempt::ServedTime {
                    fine: rules.jail_fine,
                };
            }
            return EscapeAttempt::Doubles;
        }

        self.jail = JailStatus::Jailed { attempts };
        EscapeAttempt::Stayed { attempts }
    }

    /// Pay the fine to leave jail.
    ///
    /// Only valid while jailed with at least `fine` in cash; otherwise nothing
    /// changes. Returns whether the fine was paid.
    pub fn pay_jail_fine(&mut self, fine: i64) -> bool {
        if !self.is_in_jail() || self.money < fine {
            return false;
        }
        self.reduce_money(fine);
        self.jail = JailStatus::Free;
        true
    }

    /// One-line summary, e.g. `Alice - $1500 - Position: 6 (In Jail)`.
    #[must_use]
    pub fn status(&self) -> String {
        format!(
            "{} - ${} - Position: {}{}",
            self.name,
            self.money,
            self.position,
            if self.is_in_jail() { " (In Jail)" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RulesConfig {
        RulesConfig::default()
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
        assert!(map.contains(PlayerId::new(3)));
        assert!(!map.contains(PlayerId::new(4)));
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::new(2, |_| 0);

        map[PlayerId::new(0)] = 10;
        map[PlayerId::new(1)] = 20;

        assert_eq!(map[PlayerId::new(0)], 10);
        assert_eq!(map[PlayerId::new(1)], 20);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::new(0, |_| 0);
    }

    #[test]
    fn test_new_player() {
        let player = Player::new("Alice", 1500);
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.money(), 1500);
        assert_eq!(player.position(), 1);
        assert!(!player.is_in_jail());
        assert_eq!(player.turns_in_jail(), 0);
    }

    #[test]
    fn test_money_can_go_negative() {
        let mut player = Player::new("Alice", 100);
        player.reduce_money(250);
        assert_eq!(player.money(), -150);
        assert!(player.is_bankrupt());
    }

    #[test]
    fn test_doubles_release_without_fine() {
        let mut player = Player::new("Alice", 1500);
        player.go_to_jail();

        let attempt = player.try_to_get_out_of_jail(3, 3, &rules());

        assert_eq!(attempt, EscapeAttempt::Doubles);
        assert!(!player.is_in_jail());
        assert_eq!(player.money(), 1500);
        assert_eq!(player.turns_in_jail(), 0);
    }

    #[test]
    fn test_third_attempt_forces_release_with_fine() {
        let mut player = Player::new("Alice", 1500);
        player.go_to_jail();

        assert_eq!(
            player.try_to_get_out_of_jail(2, 3, &rules()),
            EscapeAttempt::Stayed { attempts: 1 }
        );
        assert_eq!(
            player.try_to_get_out_of_jail(1, 2, &rules()),
            EscapeAttempt::Stayed { attempts: 2 }
        );
        assert_eq!(player.turns_in_jail(), 2);

        let attempt = player.try_to_get_out_of_jail(1, 4, &rules());
        assert_eq!(attempt, EscapeAttempt::ServedTime { fine: 150 });
        assert!(attempt.is_released());
        assert!(!player.is_in_jail());
        assert_eq!(player.money(), 1350);
        assert_eq!(player.turns_in_jail(), 0);
    }

    #[test]
    fn test_forced_release_can_overdraw() {
        let mut player = Player::new("Alice", 100);
        player.go_to_jail();
        player.try_to_get_out_of_jail(1, 2, &rules());
        player.try_to_get_out_of_jail(1, 2, &rules());
        player.try_to_get_out_of_jail(1, 2, &rules());
        assert_eq!(player.money(), -50);
    }

    #[test]
    fn test_go_to_jail_resets_counter() {
        let mut player = Player::new("Alice", 1500);
        player.go_to_jail();
        player.try_to_get_out_of_jail(1, 2, &rules());
        assert_eq!(player.turns_in_jail(), 1);

        player.go_to_jail();
        assert_eq!(player.turns_in_jail(), 0);
    }

    #[test]
    fn test_escape_roll_while_free_is_noop() {
        let mut player = Player::new("Alice", 1500);
        let attempt = player.try_to_get_out_of_jail(1, 1, &rules());
        assert_eq!(attempt, EscapeAttempt::Stayed { attempts: 0 });
        assert!(!player.is_in_jail());
        assert_eq!(player.money(), 1500);
    }

    #[test]
    fn test_pay_jail_fine() {
        let mut player = Player::new("Alice", 1500);
        player.go_to_jail();

        assert!(player.pay_jail_fine(150));
        assert!(!player.is_in_jail());
        assert_eq!(player.money(), 1350);
    }

    #[test]
    fn test_pay_jail_fine_requires_funds_and_jail() {
        let mut free = Player::new("Alice", 1500);
        assert!(!free.pay_jail_fine(150));
        assert_eq!(free.money(), 1500);

        let mut poor = Player::new("Bob", 149);
        poor.go_to_jail();
        assert!(!poor.pay_jail_fine(150));
        assert!(poor.is_in_jail());
        assert_eq!(poor.money(), 149);
    }

    #[test]
    fn test_status_line() {
        let mut player = Player::new("Alice", 1500);
        assert_eq!(player.status(), "Alice - $1500 - Position: 1");

        player.set_position(6);
        player.go_to_jail();
        assert_eq!(player.status(), "Alice - $1500 - Position: 6 (In Jail)");
    }
}
