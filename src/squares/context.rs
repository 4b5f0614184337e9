//! Context handed to square effects.

use crate::core::{GameRng, Player, PlayerId, PlayerMap, RulesConfig};
use crate::decisions::DecisionSource;
use crate::events::{GameEvent, Narrator};

/// Everything a square may touch while resolving a landing or a pass.
///
/// Borrowed from the game for the duration of one effect, so a square can
/// move money between players without holding references to them.
pub struct TurnContext<'a> {
    /// Every seat, including eliminated players.
    pub players: &'a mut PlayerMap<Player>,
    pub rules: &'a RulesConfig,
    /// Stream for chance draws.
    pub rng: &'a mut GameRng,
    pub decisions: &'a mut dyn DecisionSource,
    pub narrator: &'a mut dyn Narrator,
    /// Where Go to Jail sends players.
    pub jail_position: u8,
}

impl<'a> TurnContext<'a> {
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    /// Owned copy of a player's name, for events and prompts.
    #[must_use]
    pub fn name_of(&self, player: PlayerId) -> String {
        self.players[player].name().to_string()
    }

    pub fn credit(&mut self, player: PlayerId, amount: i64) {
        self.players[player].add_money(amount);
    }

    /// Debit unconditionally, announcing bankruptcy if the balance ends
    /// below zero.
    pub fn debit(&mut self, player: PlayerId, amount: i64) {
        self.players[player].reduce_money(amount);
        if self.players[player].is_bankrupt() {
            let name = self.name_of(player);
            self.narrate(GameEvent::WentBankrupt { player: name });
        }
    }

    pub fn narrate(&mut self, event: GameEvent) {
        self.narrator.narrate(event);
    }
}
