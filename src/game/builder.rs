//! Game construction.

use smallvec::SmallVec;

use super::Game;
use crate::board::Board;
use crate::core::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::{Dice, GameError, GameRng, Player, PlayerId, PlayerMap, RulesConfig};

/// Builder for creating a [`Game`].
///
/// ```
/// use rust_monopoly::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .player("Alice")
///     .player("Bob")
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.active_players().len(), 2);
/// assert_eq!(game.current_round(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    names: Vec<String>,
    seed: Option<u64>,
    rules: RulesConfig,
    board: Option<Board>,
    dice: Option<[Dice; 2]>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat one more player.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Seat several players in order.
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Seed every random stream (dice and chance). Without a seed the game
    /// is seeded from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Play on a custom board instead of the standard layout.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Use explicit dice instead of ones derived from the seed.
    pub fn dice(mut self, first: Dice, second: Dice) -> Self {
        self.dice = Some([first, second]);
        self
    }

    /// Build the game, checking the player count and the rules.
    pub fn build(self) -> Result<Game, GameError> {
        self.rules
            .validate()
            .map_err(|reason| GameError::InvalidRules { reason })?;

        let count = self.names.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::PlayerCount {
                count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let root = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let faces = self.rules.die_faces;
        let dice = self.dice.unwrap_or_else(|| {
            [
                Dice::with_faces(faces, root.for_context("die-1")),
                Dice::with_faces(faces, root.for_context("die-2")),
            ]
        });

        let money = self.rules.starting_money;
        let names = self.names;
        let players = PlayerMap::new(count, |id| Player::new(names[id.index()].clone(), money));
        let active: SmallVec<[PlayerId; MAX_PLAYERS]> = PlayerId::all(count).collect();

        Ok(Game {
            rules: self.rules,
            players,
            active,
            board: self.board.unwrap_or_default(),
            dice,
            chance_rng: root.for_context("chance"),
            current_player_index: 0,
            current_round: 0,
            round_in_progress: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_count_bounds() {
        for count in [0, 1, 7] {
            let names: Vec<String> = (0..count).map(|i| format!("P{i}")).collect();
            let err = GameBuilder::new().players(names).build().unwrap_err();
            assert!(matches!(err, GameError::PlayerCount { count: c, .. } if c == count));
        }

        for count in 2..=6 {
            let names: Vec<String> = (0..count).map(|i| format!("P{i}")).collect();
            let game = GameBuilder::new().players(names).seed(1).build().unwrap();
            assert_eq!(game.active_players().len(), count);
        }
    }

    #[test]
    fn test_players_start_on_go_with_starting_money() {
        let game = GameBuilder::new()
            .players(["Alice", "Bob", "Cara"])
            .rules(RulesConfig::default().with_starting_money(900))
            .seed(5)
            .build()
            .unwrap();

        for id in game.active_players() {
            let player = game.player(*id).unwrap();
            assert_eq!(player.money(), 900);
            assert_eq!(player.position(), 1);
            assert!(!player.is_in_jail());
        }
        assert_eq!(game.player(PlayerId::new(2)).unwrap().name(), "Cara");
    }

    #[test]
    fn test_unplayable_die_is_an_error() {
        for faces in [0, 128] {
            let rules = RulesConfig {
                die_faces: faces,
                ..RulesConfig::default()
            };
            let err = GameBuilder::new()
                .players(["A", "B"])
                .rules(rules)
                .build()
                .unwrap_err();
            assert!(matches!(err, GameError::InvalidRules { .. }));
        }
    }

    #[test]
    fn test_custom_board_is_used() {
        let game = GameBuilder::new()
            .players(["A", "B"])
            .board(Board::blank())
            .build()
            .unwrap();
        assert_eq!(game.board().square(2).unwrap().name(), "Empty");
    }
}
