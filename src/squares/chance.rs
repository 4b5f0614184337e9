//! Cash squares: Chance and Income Tax.

use serde::{Deserialize, Serialize};

use super::context::TurnContext;
use super::square::SquareEffect;
use crate::core::PlayerId;
use crate::events::GameEvent;

/// Even odds of gaining $10-$200 or losing $10-$300, in steps of $10.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChanceSquare {
    position: u8,
}

impl ChanceSquare {
    pub fn new(position: u8) -> Self {
        Self { position }
    }
}

impl SquareEffect for ChanceSquare {
    fn position(&self) -> u8 {
        self.position
    }

    fn name(&self) -> &str {
        "Chance"
    }

    fn land_on(&mut self, player: PlayerId, ctx: &mut TurnContext<'_>) {
        let name = ctx.name_of(player);

        if ctx.rng.gen_bool(0.5) {
            let amount = ctx.rng.gen_range_inclusive(1, 20) * 10;
            ctx.credit(player, amount);
            ctx.narrate(GameEvent::ChanceGain { player: name, amount });
        } else {
            let amount = ctx.rng.gen_range_inclusive(1, 30) * 10;
            ctx.debit(player, amount);
            ctx.narrate(GameEvent::ChanceLoss { player: name, amount });
        }
    }
}

/// Takes 10% of the player's cash rounded down to the hundred.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxSquare {
    position: u8,
}

impl IncomeTaxSquare {
    pub fn new(position: u8) -> Self {
        Self { position }
    }

    /// Tax owed on `money`: `money / 100 * 10`.
    ///
    /// ```
    /// use rust_monopoly::squares::IncomeTaxSquare;
    ///
    /// assert_eq!(IncomeTaxSquare::tax_for(1599), 150);
    /// assert_eq!(IncomeTaxSquare::tax_for(99), 0);
    /// ```
    #[must_use]
    pub fn tax_for(money: i64) -> i64 {
        money / 100 * 10
    }
}

impl SquareEffect for IncomeTaxSquare {
    fn position(&self) -> u8 {
        self.position
    }

    fn name(&self) -> &str {
        "Income Tax"
    }

    fn land_on(&mut self, player: PlayerId, ctx: &mut TurnContext<'_>) {
        let tax = Self::tax_for(ctx.player(player).money());
        ctx.debit(player, tax);
        let name = ctx.name_of(player);
        ctx.narrate(GameEvent::TaxPaid {
            player: name,
            amount: tax,
        });
    }
}
