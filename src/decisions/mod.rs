//! Player decisions.
//!
//! The engine never decides on a player's behalf. When a rule offers a
//! choice it builds a [`Decision`] and asks a [`DecisionSource`], blocking
//! the turn until an answer comes back. Game state is not touched while a
//! decision is outstanding, and only one is ever outstanding at a time.

use std::collections::VecDeque;

/// A yes/no question put to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision<'a> {
    /// Buy an unowned property the player can afford.
    BuyProperty {
        player: &'a str,
        property: &'a str,
        price: i64,
    },
    /// Pay the fine to leave jail before rolling.
    PayJailFine { player: &'a str, fine: i64 },
}

impl std::fmt::Display for Decision<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::BuyProperty {
                player,
                property,
                price,
            } => write!(f, "{player} can buy {property} for ${price}. Do you want to buy?"),
            Decision::PayJailFine { player, fine } => {
                write!(f, "{player}, do you want to pay ${fine} to get out of jail?")
            }
        }
    }
}

/// Answers yes/no decisions.
///
/// How invalid input is re-prompted is up to the implementation; the engine
/// only sees the final answer.
pub trait DecisionSource {
    fn ask_yes_no(&mut self, decision: &Decision<'_>) -> bool;
}

impl<F> DecisionSource for F
where
    F: FnMut(&Decision<'_>) -> bool,
{
    fn ask_yes_no(&mut self, decision: &Decision<'_>) -> bool {
        self(decision)
    }
}

/// Says yes to everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysAccept;

impl DecisionSource for AlwaysAccept {
    fn ask_yes_no(&mut self, _decision: &Decision<'_>) -> bool {
        true
    }
}

/// Says no to everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysDecline;

impl DecisionSource for AlwaysDecline {
    fn ask_yes_no(&mut self, _decision: &Decision<'_>) -> bool {
        false
    }
}

/// Replays a fixed list of answers, then falls back to a default.
#[derive(Clone, Debug)]
pub struct Scripted {
    answers: VecDeque<bool>,
    fallback: bool,
    asked: usize,
}

impl Scripted {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            fallback: false,
            asked: 0,
        }
    }

    /// Answer used once the script runs out (default: no).
    #[must_use]
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// How many decisions have been asked so far.
    #[must_use]
    pub fn asked(&self) -> usize {
        self.asked
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl DecisionSource for Scripted {
    fn ask_yes_no(&mut self, _decision: &Decision<'_>) -> bool {
        self.asked += 1;
        self.answers.pop_front().unwrap_or(self.fallback)
    }
}
