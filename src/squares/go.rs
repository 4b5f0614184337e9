//! The Go square.

use serde::{Deserialize, Serialize};

use super::context::TurnContext;
use super::square::SquareEffect;
use crate::core::PlayerId;
use crate::events::GameEvent;

/// Pays the salary on landing and on passing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoSquare {
    position: u8,
}

impl GoSquare {
    pub fn new(position: u8) -> Self {
        Self { position }
    }
}

impl SquareEffect for GoSquare {
    fn position(&self) -> u8 {
        self.position
    }

    fn name(&self) -> &str {
        "Go"
    }

    fn land_on(&mut self, player: PlayerId, ctx: &mut TurnContext<'_>) {
        let amount = ctx.rules.go_salary;
        ctx.credit(player, amount);
        let name = ctx.name_of(player);
        ctx.narrate(GameEvent::Salary {
            player: name,
            amount,
            passed: false,
        });
    }

    /// No pay if the player is already standing on Go.
    fn pass_by(&mut self, player: PlayerId, ctx: &mut TurnContext<'_>) {
        if ctx.player(player).position() == self.position {
            return;
        }
        let amount = ctx.rules.go_salary;
        ctx.credit(player, amount);
        let name = ctx.name_of(player);
        ctx.narrate(GameEvent::Salary {
            player: name,
            amount,
            passed: true,
        });
    }
}
