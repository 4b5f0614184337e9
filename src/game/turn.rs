//! Turn resolution: movement, landing, jail turns, elimination and rounds.

use tracing::{debug, instrument};

use super::{Game, GameResult, Standing};
use crate::core::config::BOARD_SIZE;
use crate::core::{EscapeAttempt, GameError, PlayerId};
use crate::decisions::{Decision, DecisionSource};
use crate::events::{GameEvent, Narrator};
use crate::squares::TurnContext;

impl Game {
    /// Resolve one turn for `player`.
    ///
    /// A jailed player gets a jail turn; anyone else rolls and moves. No
    /// round bookkeeping or elimination happens here. Once the game is over
    /// and no round is left to finish, no more turns are taken.
    #[instrument(skip_all, fields(player = %player, round = self.current_round))]
    pub fn take_turn(
        &mut self,
        player: PlayerId,
        decisions: &mut dyn DecisionSource,
        narrator: &mut dyn Narrator,
    ) -> Result<(), GameError> {
        if self.is_game_over() && !self.round_in_progress {
            return Err(GameError::GameOver);
        }
        if !self.is_active(player) {
            return Err(GameError::NotActive { player });
        }
        self.resolve_turn(player, decisions, narrator);
        Ok(())
    }

    /// Play the next turn in rotation.
    ///
    /// Starts a new round when the previous one has finished, and
    /// eliminates the player if the turn left them bankrupt. Whether the
    /// game is over is only checked between rounds, so a started round
    /// always finishes. Returns the player who moved, or `None` once the
    /// game is over.
    pub fn play_turn(
        &mut self,
        decisions: &mut dyn DecisionSource,
        narrator: &mut dyn Narrator,
    ) -> Option<PlayerId> {
        if !self.round_in_progress {
            if self.is_game_over() {
                return None;
            }
            self.current_round += 1;
            self.current_player_index = 0;
            self.round_in_progress = true;
            narrator.narrate(GameEvent::RoundStarted {
                round: self.current_round,
            });
        }

        let player = *self.active.get(self.current_player_index)?;
        self.resolve_turn(player, decisions, narrator);

        // Removing the current player shifts the next one into this index.
        if !self.eliminate_if_bankrupt(player, narrator) {
            self.current_player_index += 1;
        }
        if self.current_player_index >= self.active.len() {
            self.current_player_index = 0;
            self.round_in_progress = false;
        }

        Some(player)
    }

    /// Play turns until the current round is complete.
    pub fn play_round(&mut self, decisions: &mut dyn DecisionSource, narrator: &mut dyn Narrator) {
        while self.play_turn(decisions, narrator).is_some() && self.round_in_progress {}
    }

    /// Play until the game is over, then announce and return the result.
    #[instrument(skip_all)]
    pub fn play(&mut self, decisions: &mut dyn DecisionSource, narrator: &mut dyn Narrator) -> GameResult {
        while self.play_turn(decisions, narrator).is_some() {}
        self.announce_winner(narrator)
    }

    /// Current ranking of the active players.
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult::from_standings(self.active.iter().map(|&id| Standing {
            player: id,
            name: self.players[id].name().to_string(),
            money: self.players[id].money(),
        }))
    }

    /// Narrate and return the current ranking.
    pub fn announce_winner(&self, narrator: &mut dyn Narrator) -> GameResult {
        let result = self.result();
        narrator.narrate(GameEvent::GameOver {
            result: result.clone(),
        });
        result
    }

    fn resolve_turn(&mut self, player: PlayerId, decisions: &mut dyn DecisionSource, narrator: &mut dyn Narrator) {
        if self.players[player].is_in_jail() {
            self.jail_turn(player, decisions, narrator);
        } else {
            self.free_turn(player, decisions, narrator);
        }
    }

    fn roll(&mut self, player: PlayerId, narrator: &mut dyn Narrator) -> (u8, u8) {
        let die1 = self.dice[0].roll();
        let die2 = self.dice[1].roll();
        narrator.narrate(GameEvent::Rolled {
            player: self.players[player].name().to_string(),
            die1,
            die2,
        });
        (die1, die2)
    }

    fn free_turn(&mut self, player: PlayerId, decisions: &mut dyn DecisionSource, narrator: &mut dyn Narrator) {
        let (die1, die2) = self.roll(player, narrator);
        self.advance(player, die1 + die2, decisions, narrator);
    }

    /// Offer the fine, otherwise roll for release.
    fn jail_turn(&mut self, player: PlayerId, decisions: &mut dyn DecisionSource, narrator: &mut dyn Narrator) {
        let name = self.players[player].name().to_string();
        narrator.narrate(GameEvent::InJail {
            player: name.clone(),
        });

        let fine = self.rules.jail_fine;
        if self.players[player].money() >= fine {
            let pay = decisions.ask_yes_no(&Decision::PayJailFine {
                player: &name,
                fine,
            });
            if pay && self.players[player].pay_jail_fine(fine) {
                narrator.narrate(GameEvent::JailFinePaid { player: name, fine });
                self.free_turn(player, decisions, narrator);
                return;
            }
        }

        let (die1, die2) = self.roll(player, narrator);
        match self.players[player].try_to_get_out_of_jail(die1, die2, &self.rules) {
            EscapeAttempt::Doubles => {
                narrator.narrate(GameEvent::ReleasedOnDoubles { player: name });
            }
            EscapeAttempt::ServedTime { fine } => {
                narrator.narrate(GameEvent::ReleasedAfterFine {
                    player: name.clone(),
                    fine,
                });
                if self.players[player].is_bankrupt() {
                    narrator.narrate(GameEvent::WentBankrupt { player: name });
                }
            }
            EscapeAttempt::Stayed { attempts } => {
                debug!(attempts, "still jailed");
                narrator.narrate(GameEvent::StayedInJail { player: name });
                return;
            }
        }

        self.advance(player, die1 + die2, decisions, narrator);
    }

    /// Move `steps` squares, paying Go on wraparound, and land.
    fn advance(
        &mut self,
        player: PlayerId,
        steps: u8,
        decisions: &mut dyn DecisionSource,
        narrator: &mut dyn Narrator,
    ) {
        let jail_position = self.jail_position();
        let Game {
            rules,
            players,
            board,
            chance_rng,
            ..
        } = self;

        let mut ctx = TurnContext {
            players,
            rules,
            rng: chance_rng,
            decisions,
            narrator,
            jail_position,
        };

        let from = ctx.player(player).position();
        let mut to = u16::from(from) + u16::from(steps);
        while to > u16::from(BOARD_SIZE) {
            to -= u16::from(BOARD_SIZE);
            // Pass-Go pays before the token moves.
            if let Ok(go) = board.square_mut(1) {
                go.pass_by(player, &mut ctx);
            }
        }
        let to = to as u8;
        ctx.player_mut(player).set_position(to);
        debug!(from, to, steps, "moved");

        if let Ok(square) = board.square_mut(usize::from(to)) {
            let name = ctx.name_of(player);
            ctx.narrate(GameEvent::Moved {
                player: name,
                from,
                to,
                square: square.name().to_string(),
            });
            square.land_on(player, &mut ctx);
        }
    }

    /// Retire a bankrupt player: every property on the board is released and
    /// the player leaves the rotation. Returns whether they were removed.
    fn eliminate_if_bankrupt(&mut self, player: PlayerId, narrator: &mut dyn Narrator) -> bool {
        if !self.players[player].is_bankrupt() {
            return false;
        }

        narrator.narrate(GameEvent::Retired {
            player: self.players[player].name().to_string(),
        });
        self.board.release_all();
        self.active.retain(|p| *p != player);
        true
    }
}
