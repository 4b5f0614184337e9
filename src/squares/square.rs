//! The square capability trait and the serializable square union.

use serde::{Deserialize, Serialize};

use super::chance::{ChanceSquare, IncomeTaxSquare};
use super::context::TurnContext;
use super::go::GoSquare;
use super::jail::{FreeParkingSquare, GoToJailSquare, JailSquare};
use super::property::PropertySquare;
use crate::core::PlayerId;

/// Behavior of one board square.
///
/// `land_on` is the mandatory effect when a move ends on the square.
/// `pass_by` fires when a move crosses the square without stopping; only Go
/// pays out on a pass. `release_ownership` is the bankruptcy hook: squares
/// that can be owned forget their owner, the rest ignore it.
pub trait SquareEffect {
    /// Board position (1-based). Fixed at construction.
    fn position(&self) -> u8;

    fn name(&self) -> &str;

    fn land_on(&mut self, player: PlayerId, ctx: &mut TurnContext<'_>);

    fn pass_by(&mut self, _player: PlayerId, _ctx: &mut TurnContext<'_>) {}

    fn release_ownership(&mut self) {}
}

/// Variant tag, for display and board editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SquareKind {
    Go,
    Property,
    Chance,
    IncomeTax,
    Jail,
    GoToJail,
    FreeParking,
}

/// Any square that can sit on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Square {
    Go(GoSquare),
    Property(PropertySquare),
    Chance(ChanceSquare),
    IncomeTax(IncomeTaxSquare),
    Jail(JailSquare),
    GoToJail(GoToJailSquare),
    FreeParking(FreeParkingSquare),
}

impl Square {
    fn effect(&self) -> &dyn SquareEffect {
        match self {
            Square::Go(s) => s,
            Square::Property(s) => s,
            Square::Chance(s) => s,
            Square::IncomeTax(s) => s,
            Square::Jail(s) => s,
            Square::GoToJail(s) => s,
            Square::FreeParking(s) => s,
        }
    }

    fn effect_mut(&mut self) -> &mut dyn SquareEffect {
        match self {
            Square::Go(s) => s,
            Square::Property(s) => s,
            Square::Chance(s) => s,
            Square::IncomeTax(s) => s,
            Square::Jail(s) => s,
            Square::GoToJail(s) => s,
            Square::FreeParking(s) => s,
        }
    }

    #[must_use]
    pub fn kind(&self) -> SquareKind {
        match self {
            Square::Go(_) => SquareKind::Go,
            Square::Property(_) => SquareKind::Property,
            Square::Chance(_) => SquareKind::Chance,
            Square::IncomeTax(_) => SquareKind::IncomeTax,
            Square::Jail(_) => SquareKind::Jail,
            Square::GoToJail(_) => SquareKind::GoToJail,
            Square::FreeParking(_) => SquareKind::FreeParking,
        }
    }

    #[must_use]
    pub fn position(&self) -> u8 {
        self.effect().position()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.effect().name()
    }

    pub fn land_on(&mut self, player: PlayerId, ctx: &mut TurnContext<'_>) {
        self.effect_mut().land_on(player, ctx);
    }

    pub fn pass_by(&mut self, player: PlayerId, ctx: &mut TurnContext<'_>) {
        self.effect_mut().pass_by(player, ctx);
    }

    pub fn release_ownership(&mut self) {
        self.effect_mut().release_ownership();
    }

    /// Owner, for ownable squares.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Square::Property(p) => p.owner(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_property(&self) -> Option<&PropertySquare> {
        match self {
            Square::Property(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_property_mut(&mut self) -> Option<&mut PropertySquare> {
        match self {
            Square::Property(p) => Some(p),
            _ => None,
        }
    }
}

impl From<GoSquare> for Square {
    fn from(s: GoSquare) -> Self {
        Square::Go(s)
    }
}

impl From<PropertySquare> for Square {
    fn from(s: PropertySquare) -> Self {
        Square::Property(s)
    }
}

impl From<ChanceSquare> for Square {
    fn from(s: ChanceSquare) -> Self {
        Square::Chance(s)
    }
}

impl From<IncomeTaxSquare> for Square {
    fn from(s: IncomeTaxSquare) -> Self {
        Square::IncomeTax(s)
    }
}

impl From<JailSquare> for Square {
    fn from(s: JailSquare) -> Self {
        Square::Jail(s)
    }
}

impl From<GoToJailSquare> for Square {
    fn from(s: GoToJailSquare) -> Self {
        Square::GoToJail(s)
    }
}

impl From<FreeParkingSquare> for Square {
    fn from(s: FreeParkingSquare) -> Self {
        Square::FreeParking(s)
    }
}
