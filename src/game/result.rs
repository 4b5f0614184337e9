//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A player's final position in the money ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub money: i64,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single richest player.
    Winner(Standing),
    /// Several players share the highest balance.
    Tie(Vec<Standing>),
    /// Everyone went bankrupt.
    NoWinner,
}

impl GameResult {
    /// Rank the surviving players by cash.
    ///
    /// Ties keep the order the standings were given in.
    #[must_use]
    pub fn from_standings(standings: impl IntoIterator<Item = Standing>) -> Self {
        let standings: Vec<Standing> = standings.into_iter().collect();
        let Some(best) = standings.iter().map(|s| s.money).max() else {
            return GameResult::NoWinner;
        };

        let mut winners: Vec<Standing> = standings.into_iter().filter(|s| s.money == best).collect();
        if winners.len() == 1 {
            GameResult::Winner(winners.remove(0))
        } else {
            GameResult::Tie(winners)
        }
    }

    /// Check if a player won or shared the win.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners().iter().any(|s| s.player == player)
    }

    #[must_use]
    pub fn winners(&self) -> &[Standing] {
        match self {
            GameResult::Winner(s) => std::slice::from_ref(s),
            GameResult::Tie(ss) => ss,
            GameResult::NoWinner => &[],
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(s) => write!(f, "Game over! {} wins with ${}", s.name, s.money),
            GameResult::Tie(ss) => {
                let names: Vec<&str> = ss.iter().map(|s| s.name.as_str()).collect();
                let money = ss.first().map_or(0, |s| s.money);
                write!(
                    f,
                    "Game over! It's a tie between: {} with ${} each",
                    names.join(" and "),
                    money
                )
            }
            GameResult::NoWinner => write!(f, "Game over! No winners - everyone went bankrupt!"),
        }
    }
}
