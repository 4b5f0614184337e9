//! Jail, Go to Jail and Free Parking.

use serde::{Deserialize, Serialize};

use super::context::TurnContext;
use super::square::SquareEffect;
use crate::core::PlayerId;
use crate::events::GameEvent;

/// The jail itself. Landing here is just a visit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JailSquare {
    position: u8,
}

impl JailSquare {
    pub fn new(position: u8) -> Self {
        Self { position }
    }
}

impl SquareEffect for JailSquare {
    fn position(&self) -> u8 {
        self.position
    }

    fn name(&self) -> &str {
        "In Jail/Just Visiting"
    }

    fn land_on(&mut self, player: PlayerId, ctx: &mut TurnContext<'_>) {
        if !ctx.player(player).is_in_jail() {
            let name = ctx.name_of(player);
            ctx.narrate(GameEvent::JustVisiting { player: name });
        }
    }
}

/// Sends the player to jail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoToJailSquare {
    position: u8,
}

impl GoToJailSquare {
    pub fn new(position: u8) -> Self {
        Self { position }
    }
}

impl SquareEffect for GoToJailSquare {
    fn position(&self) -> u8 {
        self.position
    }

    fn name(&self) -> &str {
        "Go to Jail"
    }

    fn land_on(&mut self, player: PlayerId, ctx: &mut TurnContext<'_>) {
        let jail = ctx.jail_position;
        let target = ctx.player_mut(player);
        target.go_to_jail();
        target.set_position(jail);

        let name = ctx.name_of(player);
        ctx.narrate(GameEvent::SentToJail { player: name });
    }
}

/// Nothing happens here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeParkingSquare {
    position: u8,
    name: String,
}

impl FreeParkingSquare {
    pub fn new(position: u8) -> Self {
        Self::named(position, "Free Parking")
    }

    /// A no-op square under another name (used for blank design slots).
    pub fn named(position: u8, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}

impl SquareEffect for FreeParkingSquare {
    fn position(&self) -> u8 {
        self.position
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn land_on(&mut self, player: PlayerId, ctx: &mut TurnContext<'_>) {
        let name = ctx.name_of(player);
        ctx.narrate(GameEvent::FreeParking { player: name });
    }
}

#[cfg(test)]
mod tests {
    use super::super::context::fixture::Table;
    use super::*;
    use crate::core::config::JAIL_POSITION;

    #[test]
    fn test_visiting_jail_changes_nothing() {
        let mut table = Table::new(2);
        let p0 = PlayerId::new(0);
        table.players[p0].set_position(6);

        JailSquare::new(6).land_on(p0, &mut table.ctx());

        assert!(!table.players[p0].is_in_jail());
        assert_eq!(table.money(p0), 1500);
        assert_eq!(table.log.lines(), vec!["P0 is just visiting jail"]);
    }

    #[test]
    fn test_jailed_player_on_jail_square_is_silent() {
        let mut table = Table::new(2);
        let p0 = PlayerId::new(0);
        table.players[p0].go_to_jail();

        JailSquare::new(6).land_on(p0, &mut table.ctx());

        assert!(table.players[p0].is_in_jail());
        assert!(table.log.is_empty());
    }

    #[test]
    fn test_go_to_jail_relocates_to_jail() {
        let mut table = Table::new(2);
        let p0 = PlayerId::new(0);
        table.players[p0].set_position(16);

        GoToJailSquare::new(16).land_on(p0, &mut table.ctx());

        let player = &table.players[p0];
        assert!(player.is_in_jail());
        assert_eq!(player.turns_in_jail(), 0);
        assert_eq!(player.position(), JAIL_POSITION);
        assert_eq!(table.log.lines(), vec!["P0 goes to jail"]);
    }

    #[test]
    fn test_free_parking_is_noop() {
        let mut table = Table::new(2);
        let p0 = PlayerId::new(0);

        FreeParkingSquare::new(11).land_on(p0, &mut table.ctx());

        assert_eq!(table.money(p0), 1500);
        assert_eq!(table.players[p0].position(), 1);
    }

    #[test]
    fn test_named_placeholder() {
        let square = FreeParkingSquare::named(3, "Empty");
        assert_eq!(square.name(), "Empty");
        assert_eq!(square.position(), 3);
    }
}
